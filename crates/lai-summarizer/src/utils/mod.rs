//! Utilities module - Common helpers for word and whitespace handling

pub mod text_utils;

pub use text_utils::TextUtils;
