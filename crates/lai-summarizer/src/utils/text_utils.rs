//! Text processing helpers shared by the summarizers and their callers

use std::borrow::Cow;
use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Word and whitespace operations that avoid allocation when possible
pub struct TextUtils;

impl TextUtils {
    /// Collapse whitespace runs to a single space and trim the ends
    pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
        let trimmed = text.trim();
        if WHITESPACE_REGEX.find_iter(trimmed).any(|m| m.as_str() != " ") {
            Cow::Owned(WHITESPACE_REGEX.replace_all(trimmed, " ").into_owned())
        } else {
            Cow::Borrowed(trimmed)
        }
    }

    /// First `n` whitespace-delimited words joined by single spaces.
    /// Returns `None` when the text has `n` words or fewer.
    pub fn first_words(text: &str, n: usize) -> Option<String> {
        let mut words = text.split_whitespace();
        let head: Vec<&str> = words.by_ref().take(n).collect();
        if words.next().is_none() {
            return None;
        }
        Some(head.join(" "))
    }

    /// Count words (no allocation)
    pub fn count_words(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Length in characters, not bytes
    pub fn char_len(text: &str) -> usize {
        text.chars().count()
    }

    /// Truncate to at most `max_chars` characters, ending in an ellipsis when cut
    pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> Cow<'_, str> {
        if Self::char_len(text) <= max_chars {
            Cow::Borrowed(text)
        } else if max_chars <= 3 {
            Cow::Borrowed("...")
        } else {
            let mut result: String = text.chars().take(max_chars - 3).collect();
            result.push_str("...");
            Cow::Owned(result)
        }
    }

    /// A word counts toward frequency scoring when it has at least `min_chars` characters
    pub fn is_significant_word(word: &str, min_chars: usize) -> bool {
        word.chars().count() >= min_chars
    }
}
