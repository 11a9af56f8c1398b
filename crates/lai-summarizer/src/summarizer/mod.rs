//! Summarizer module - extractive summarization strategies
//!
//! Two strategies share the [`Summarizer`] trait:
//! - `Frequency` ranks sentences by document-wide word counts (default)
//! - `Truncate` keeps the first words of the document
//!
//! Both are pure functions of their input. Length checks belong to the
//! caller; see [`policy::InputPolicy`].

pub mod document;
pub mod frequency;
pub mod policy;
pub mod truncate;

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SummarizeError;

pub use document::{split_sentences, tokenize, Sentence};
pub use frequency::{FrequencyConfig, FrequencySummarizer, ScoredSentence, WordFrequencyTable};
pub use policy::InputPolicy;
pub use truncate::{TruncateConfig, TruncateSummarizer};

/// Which summarization algorithm a caller selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Frequency,
    Truncate,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Frequency => "frequency",
            Strategy::Truncate => "truncate",
        }
    }

    /// Build a summarizer for this strategy using the configured limits
    pub fn summarizer(&self, config: &Config) -> Box<dyn Summarizer> {
        match self {
            Strategy::Frequency => Box::new(
                FrequencySummarizer::new().with_max_sentences(config.summary_sentences),
            ),
            Strategy::Truncate => {
                Box::new(TruncateSummarizer::new().with_max_words(config.truncate_words))
            }
        }
    }

    /// Summarizer with built-in defaults
    pub fn default_summarizer(&self) -> Box<dyn Summarizer> {
        match self {
            Strategy::Frequency => Box::new(FrequencySummarizer::new()),
            Strategy::Truncate => Box::new(TruncateSummarizer::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frequency" => Ok(Strategy::Frequency),
            "truncate" => Ok(Strategy::Truncate),
            other => Err(SummarizeError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Result of one summarization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rendered summary
    pub text: String,
    /// Selected pieces in output order; empty when nothing qualified
    pub selected: Vec<String>,
    pub strategy: Strategy,
    /// Qualifying sentences in the source document
    pub sentence_count: usize,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

pub trait Summarizer: Send + Sync {
    fn strategy(&self) -> Strategy;

    fn summarize_document(&self, text: &str) -> Summary;

    fn name(&self) -> &'static str {
        self.strategy().as_str()
    }

    fn summarize(&self, text: &str) -> String {
        self.summarize_document(text).text
    }
}

/// Summarize with the default frequency strategy.
///
/// ```
/// let summary = lai_summarizer::summarize("Rust is fast. Rust is safe. Rust is fun.");
/// assert!(summary.ends_with('.'));
/// ```
pub fn summarize(text: &str) -> String {
    FrequencySummarizer::new().summarize(text)
}

/// Summarize many documents in parallel; output order matches input order.
pub fn summarize_batch<S, T>(summarizer: &S, texts: &[T]) -> Vec<Summary>
where
    S: Summarizer + ?Sized,
    T: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| summarizer.summarize_document(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("frequency".parse::<Strategy>(), Ok(Strategy::Frequency));
        assert_eq!(" Truncate ".parse::<Strategy>(), Ok(Strategy::Truncate));
        assert_eq!(
            "abstractive".parse::<Strategy>(),
            Err(SummarizeError::UnknownStrategy("abstractive".into()))
        );
    }

    #[test]
    fn test_strategy_serde() {
        assert_eq!(serde_json::to_string(&Strategy::Truncate).unwrap(), "\"truncate\"");
        let parsed: Strategy = serde_json::from_str("\"frequency\"").unwrap();
        assert_eq!(parsed, Strategy::Frequency);
    }

    #[test]
    fn test_summarizer_names() {
        assert_eq!(Strategy::Frequency.default_summarizer().name(), "frequency");
        assert_eq!(Strategy::Truncate.default_summarizer().name(), "truncate");
    }

    #[test]
    fn test_free_function_matches_frequency_strategy() {
        let text = "Cats are great. Dogs are great too. Birds can be great pets as well. Great animals make great companions.";
        assert_eq!(summarize(text), FrequencySummarizer::new().summarize(text));
    }

    #[test]
    fn test_example_without_delimiter() {
        assert_eq!(summarize("  just a fragment with no ending "), "just a fragment with no ending.");
    }

    #[test]
    fn test_batch_preserves_order() {
        let texts = vec![
            "First doc. Has two sentences.".to_string(),
            "Second doc only".to_string(),
            String::new(),
        ];
        let summaries = summarize_batch(&FrequencySummarizer::new(), &texts);
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].text, "First doc. Has two sentences.");
        assert_eq!(summaries[1].text, "Second doc only.");
        assert!(summaries[2].is_empty());
    }

    #[test]
    fn test_batch_with_boxed_summarizer() {
        let summarizer = Strategy::Truncate.default_summarizer();
        let summaries = summarize_batch(summarizer.as_ref(), &["a b c"]);
        assert_eq!(summaries[0].text, "a b c");
        assert_eq!(summaries[0].strategy, Strategy::Truncate);
    }
}

#[cfg(test)]
mod proptests {
    use super::{summarize, FrequencySummarizer};
    use proptest::prelude::*;

    fn sentence_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}").unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_three_or_more_sentences_yield_three(
            sentences in proptest::collection::vec(sentence_strategy(), 3..10)
        ) {
            let doc = sentences.join(". ") + ".";
            let summary = summarize(&doc);
            prop_assert!(summary.ends_with('.'));
            prop_assert_eq!(summary.trim_end_matches('.').split(". ").count(), 3);
        }

        #[test]
        fn prop_deterministic(doc in "[A-Za-z .!?\n]{0,200}") {
            prop_assert_eq!(summarize(&doc), summarize(&doc));
        }

        #[test]
        fn prop_short_words_do_not_change_ranking(
            sentences in proptest::collection::vec(sentence_strategy(), 1..8),
            filler in proptest::collection::vec("[a-z]{1,3}", 1..5)
        ) {
            let plain = sentences.join(". ") + ".";
            let padded = sentences
                .iter()
                .map(|s| format!("{} {}", filler.join(" "), s))
                .collect::<Vec<_>>()
                .join(". ") + ".";

            let summarizer = FrequencySummarizer::new();
            let plain_order: Vec<usize> = summarizer.rank(&plain).iter().map(|s| s.sentence.index).collect();
            let padded_order: Vec<usize> = summarizer.rank(&padded).iter().map(|s| s.sentence.index).collect();
            prop_assert_eq!(plain_order, padded_order);
        }

        #[test]
        fn prop_leading_sentence_ranks_above_identical_later_one(
            lead in sentence_strategy(),
            middle in sentence_strategy()
        ) {
            let doc = format!("{}. {}. {}.", lead, middle, lead);
            let ranked = FrequencySummarizer::new().rank(&doc);
            let first = ranked.iter().position(|s| s.sentence.index == 0).unwrap();
            let third = ranked.iter().position(|s| s.sentence.index == 2).unwrap();
            prop_assert!(first < third);
        }
    }
}
