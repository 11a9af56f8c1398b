use jni::JNIEnv;
use jni::objects::{JClass, JString};
use jni::sys::{jint, jstring};

use lai_summarizer::{InputPolicy, Strategy, Summarizer};

const ILLEGAL_ARGUMENT: &str = "java/lang/IllegalArgumentException";

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(Into::into)
}

fn to_jstring(env: &mut JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn throw_illegal_argument(env: &mut JNIEnv, message: &str) -> jstring {
    let _ = env.throw_new(ILLEGAL_ARGUMENT, message);
    std::ptr::null_mut()
}

/// `static native String summarize(String text, String strategy)`; a null
/// strategy selects the frequency summarizer.
#[no_mangle]
pub extern "system" fn Java_ai_lai_Summarizer_summarize(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
    strategy: JString,
) -> jstring {
    let Some(text) = read_string(&mut env, &text) else {
        return throw_illegal_argument(&mut env, "text must not be null");
    };

    let strategy = match read_string(&mut env, &strategy) {
        Some(raw) => match raw.parse::<Strategy>() {
            Ok(s) => s,
            Err(e) => return throw_illegal_argument(&mut env, &e.to_string()),
        },
        None => Strategy::default(),
    };

    let summary = strategy.default_summarizer().summarize(&text);
    to_jstring(&mut env, &summary)
}

/// `static native String validate(String text, int minChars)`; throws
/// IllegalArgumentException with the user-facing message on failure.
#[no_mangle]
pub extern "system" fn Java_ai_lai_Summarizer_validate(
    mut env: JNIEnv,
    _class: JClass,
    text: JString,
    min_chars: jint,
) -> jstring {
    let Some(text) = read_string(&mut env, &text) else {
        return throw_illegal_argument(&mut env, "text must not be null");
    };

    match InputPolicy::new(min_chars.max(0) as usize).validate(&text) {
        Ok(valid) => to_jstring(&mut env, valid),
        Err(e) => throw_illegal_argument(&mut env, &e.to_string()),
    }
}

#[no_mangle]
pub extern "system" fn Java_ai_lai_Summarizer_version(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    to_jstring(&mut env, env!("CARGO_PKG_VERSION"))
}
