//! C ABI for the summarizer. Strings returned by this library must be
//! released with `lai_string_free`.

use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::ptr;

use lai_summarizer::{InputPolicy, Strategy, Summarizer};

pub const LAI_OK: c_int = 0;
pub const LAI_ERR_NULL: c_int = 1;
pub const LAI_ERR_UTF8: c_int = 2;
pub const LAI_ERR_EMPTY: c_int = 3;
pub const LAI_ERR_TOO_SHORT: c_int = 4;
pub const LAI_ERR_STRATEGY: c_int = 5;

unsafe fn borrow_str<'a>(value: *const c_char) -> Result<&'a str, c_int> {
    if value.is_null() {
        return Err(LAI_ERR_NULL);
    }
    CStr::from_ptr(value).to_str().map_err(|_| LAI_ERR_UTF8)
}

unsafe fn summarize_with(text: *const c_char, strategy: *const c_char) -> Result<String, c_int> {
    let text = borrow_str(text)?;
    let strategy = if strategy.is_null() {
        Strategy::default()
    } else {
        borrow_str(strategy)?
            .parse::<Strategy>()
            .map_err(|_| LAI_ERR_STRATEGY)?
    };
    Ok(strategy.default_summarizer().summarize(text))
}

fn into_c_string(value: String) -> *mut c_char {
    // interior NULs cannot cross the boundary; strip them
    let cleaned = if value.contains('\0') { value.replace('\0', "") } else { value };
    CString::new(cleaned).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Summarize with the frequency strategy. Returns NULL on NULL or invalid UTF-8 input.
///
/// # Safety
/// `text` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lai_summarize(text: *const c_char) -> *mut c_char {
    match borrow_str(text) {
        Ok(text) => into_c_string(lai_summarizer::summarize(text)),
        Err(_) => ptr::null_mut(),
    }
}

/// Summarize with a named strategy ("frequency" or "truncate"; NULL means frequency).
/// Writes a status code to `status` when it is non-NULL.
///
/// # Safety
/// `text` and `strategy` must be NULL or valid NUL-terminated strings;
/// `status` must be NULL or point to writable memory.
#[no_mangle]
pub unsafe extern "C" fn lai_summarize_with(
    text: *const c_char,
    strategy: *const c_char,
    status: *mut c_int,
) -> *mut c_char {
    let result = summarize_with(text, strategy);

    let (code, out) = match result {
        Ok(summary) => (LAI_OK, into_c_string(summary)),
        Err(code) => (code, ptr::null_mut()),
    };
    if !status.is_null() {
        *status = code;
    }
    out
}

/// Check `text` against the minimum length policy. Returns a status code.
///
/// # Safety
/// `text` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn lai_validate(text: *const c_char, min_chars: c_int) -> c_int {
    let text = match borrow_str(text) {
        Ok(text) => text,
        Err(code) => return code,
    };
    match InputPolicy::new(min_chars.max(0) as usize).validate(text) {
        Ok(_) => LAI_OK,
        Err(lai_summarizer::SummarizeError::EmptyInput) => LAI_ERR_EMPTY,
        Err(_) => LAI_ERR_TOO_SHORT,
    }
}

/// Release a string returned by this library.
///
/// # Safety
/// `value` must be NULL or a pointer previously returned by this library.
#[no_mangle]
pub unsafe extern "C" fn lai_string_free(value: *mut c_char) {
    if !value.is_null() {
        drop(CString::from_raw(value));
    }
}

#[no_mangle]
pub extern "C" fn lai_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
