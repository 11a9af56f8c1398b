//! Sentence splitting and word tokenization over a borrowed document

use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// One or more consecutive terminators form a single boundary.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// A delimiter-bounded, trimmed, non-empty slice of the document.
///
/// `index` is the position among qualifying sentences, so the first
/// non-empty sentence is always index 0 even if the document opens with
/// stray punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    /// Lower-cased whitespace tokens of this sentence
    pub fn words(&self) -> Vec<String> {
        tokenize(self.text)
    }
}

/// Split `text` on `.`, `!` and `?` runs, dropping pieces that are empty after trimming.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence { index, text })
        .collect()
}

/// Lower-case `text` and split it on whitespace.
///
/// Punctuation stays attached to its word, so `"great."` and `"great"`
/// are different tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
