//! Fallback summarizer: keep the first N words

use tracing::debug;

use super::document::split_sentences;
use super::{Strategy, Summarizer, Summary};
use crate::utils::TextUtils;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateConfig {
    pub max_words: usize,
    pub ellipsis: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            max_words: 50,
            ellipsis: "...".to_string(),
        }
    }
}

/// Returns the document unchanged when it fits in `max_words`, otherwise
/// the leading words joined by single spaces plus an ellipsis.
#[derive(Debug, Clone, Default)]
pub struct TruncateSummarizer {
    config: TruncateConfig,
}

impl TruncateSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TruncateConfig) -> Self {
        Self { config }
    }

    pub fn with_max_words(mut self, n: usize) -> Self {
        self.config.max_words = n;
        self
    }
}

impl Summarizer for TruncateSummarizer {
    fn strategy(&self) -> Strategy {
        Strategy::Truncate
    }

    fn summarize_document(&self, text: &str) -> Summary {
        let rendered = match TextUtils::first_words(text, self.config.max_words) {
            Some(mut head) => {
                debug!("Truncating document to {} words", self.config.max_words);
                head.push_str(&self.config.ellipsis);
                head
            }
            None => text.to_string(),
        };

        let selected = if rendered.trim().is_empty() {
            Vec::new()
        } else {
            vec![rendered.clone()]
        };

        Summary {
            text: rendered,
            selected,
            strategy: Strategy::Truncate,
            sentence_count: split_sentences(text).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_short_text_unchanged() {
        let text = format!("  {}\n", words(50));
        assert_eq!(TruncateSummarizer::new().summarize(&text), text);
    }

    #[test]
    fn test_long_text_truncated() {
        let summary = TruncateSummarizer::new().summarize(&words(51));
        assert_eq!(summary, format!("{}...", words(50)));
        assert_eq!(TextUtils::count_words(&summary), 50);
    }

    #[test]
    fn test_truncation_collapses_whitespace() {
        let summary = TruncateSummarizer::new()
            .with_max_words(2)
            .summarize("one\n\ntwo   three");
        assert_eq!(summary, "one two...");
    }

    #[test]
    fn test_empty_input() {
        let summary = TruncateSummarizer::new().summarize_document("");
        assert_eq!(summary.text, "");
        assert!(summary.selected.is_empty());
    }
}
