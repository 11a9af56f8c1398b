//! Caller-side input policy.
//!
//! The summarizers accept any string. Front ends run this check first so
//! users get a message instead of a one-word summary.

use crate::error::{Result, SummarizeError};
use crate::utils::TextUtils;

pub const DEFAULT_MIN_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    pub min_chars: usize,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
        }
    }
}

impl InputPolicy {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Trim `text` and check it against the policy, returning the trimmed slice.
    pub fn validate<'a>(&self, text: &'a str) -> Result<&'a str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let actual = TextUtils::char_len(trimmed);
        if actual < self.min_chars {
            return Err(SummarizeError::TooShort {
                min: self.min_chars,
                actual,
            });
        }

        Ok(trimmed)
    }
}
