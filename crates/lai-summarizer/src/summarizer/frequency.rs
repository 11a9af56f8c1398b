//! Frequency-ranked extractive summarization
//!
//! Every word longer than three characters contributes its document-wide
//! count to each sentence it appears in. The two leading sentences get a
//! flat bonus, the ranking is sorted by score (ties keep document order),
//! and the top sentences are rendered in score order.

use std::collections::HashMap;
use tracing::debug;

use super::document::{split_sentences, tokenize, Sentence};
use super::{Strategy, Summarizer, Summary};
use crate::utils::TextUtils;

/// Tunables for [`FrequencySummarizer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyConfig {
    /// Number of sentences kept in the summary
    pub max_sentences: usize,
    /// Minimum characters for a word to be counted
    pub min_word_chars: usize,
    /// Score added to sentences in the leading positions
    pub leading_bonus: usize,
    /// How many leading sentences receive the bonus
    pub leading_positions: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            max_sentences: 3,
            min_word_chars: 4,
            leading_bonus: 2,
            leading_positions: 2,
        }
    }
}

/// Lower-cased word to occurrence count across a whole document
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count every token of `text` with at least `min_word_chars` characters.
    /// Shorter tokens are never inserted.
    pub fn from_text(text: &str, min_word_chars: usize) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in tokenize(text) {
            if TextUtils::is_significant_word(&word, min_word_chars) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for an already lower-cased token; 0 when absent
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A sentence paired with its relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub sentence: Sentence<'a>,
    pub score: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FrequencySummarizer {
    config: FrequencyConfig,
}

impl FrequencySummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrequencyConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to keep
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.config.max_sentences = n;
        self
    }

    pub fn config(&self) -> &FrequencyConfig {
        &self.config
    }

    /// Score one sentence against the document table
    pub fn score(&self, sentence: &Sentence<'_>, table: &WordFrequencyTable) -> usize {
        let words: usize = sentence.words().iter().map(|w| table.get(w)).sum();
        let bonus = if sentence.index < self.config.leading_positions {
            self.config.leading_bonus
        } else {
            0
        };
        words + bonus
    }

    /// All qualifying sentences, highest score first; equal scores keep document order.
    pub fn rank<'a>(&self, text: &'a str) -> Vec<ScoredSentence<'a>> {
        let table = WordFrequencyTable::from_text(text, self.config.min_word_chars);
        let mut scored: Vec<ScoredSentence<'a>> = split_sentences(text)
            .into_iter()
            .map(|sentence| ScoredSentence {
                score: self.score(&sentence, &table),
                sentence,
            })
            .collect();

        // sort_by is stable and sentences arrive in index order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

impl Summarizer for FrequencySummarizer {
    fn strategy(&self) -> Strategy {
        Strategy::Frequency
    }

    fn summarize_document(&self, text: &str) -> Summary {
        let ranked = self.rank(text);
        let sentence_count = ranked.len();
        let selected: Vec<String> = ranked
            .iter()
            .take(self.config.max_sentences)
            .map(|s| s.sentence.text.to_string())
            .collect();

        debug!(
            "Frequency summary: kept {} of {} sentences",
            selected.len(),
            sentence_count
        );

        let text = format!("{}.", selected.join(". "));
        Summary {
            text,
            selected,
            strategy: Strategy::Frequency,
            sentence_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMALS: &str = "Cats are great. Dogs are great too. Birds can be great pets as well. Great animals make great companions.";

    #[test]
    fn test_table_skips_short_words() {
        let table = WordFrequencyTable::from_text("The cat and the dog ran home home", 4);
        assert_eq!(table.get("home"), 2);
        assert_eq!(table.get("the"), 0);
        assert_eq!(table.get("cat"), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_lowercases_and_keeps_punctuation() {
        let table = WordFrequencyTable::from_text("Great great. GREAT", 4);
        assert_eq!(table.get("great"), 2);
        assert_eq!(table.get("great."), 1);
    }

    #[test]
    fn test_empty_table() {
        assert!(WordFrequencyTable::from_text("a an the", 4).is_empty());
    }

    #[test]
    fn test_rank_scores() {
        let ranked = FrequencySummarizer::new().rank(ANIMALS);
        let pairs: Vec<(usize, usize)> = ranked.iter().map(|s| (s.sentence.index, s.score)).collect();
        // "great" x4 plus "great." x1 in the table; sentence 3 mentions "great" twice
        assert_eq!(pairs, vec![(3, 10), (0, 7), (1, 7), (2, 6)]);
    }

    #[test]
    fn test_animals_summary() {
        let summary = FrequencySummarizer::new().summarize(ANIMALS);
        assert_eq!(
            summary,
            "Great animals make great companions. Cats are great. Dogs are great too."
        );
    }

    #[test]
    fn test_ties_keep_document_order() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Kappa lambda sigma. Omega theta iota.";
        let ranked = FrequencySummarizer::new().rank(text);
        let order: Vec<usize> = ranked.iter().map(|s| s.sentence.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_leading_bonus_lifts_first_sentence_over_duplicate() {
        let text = "Robots build robots. Humans watch closely. Robots build robots.";
        let ranked = FrequencySummarizer::new().rank(text);
        let pairs: Vec<(usize, usize)> = ranked.iter().map(|s| (s.sentence.index, s.score)).collect();
        assert_eq!(pairs, vec![(0, 8), (2, 6), (1, 4)]);
    }

    #[test]
    fn test_single_sentence() {
        let summary = FrequencySummarizer::new().summarize("  Only one sentence without an ending  ");
        assert_eq!(summary, "Only one sentence without an ending.");
    }

    #[test]
    fn test_no_sentences_renders_period() {
        let summary = FrequencySummarizer::new().summarize_document("");
        assert_eq!(summary.text, ".");
        assert!(summary.selected.is_empty());
        assert_eq!(summary.sentence_count, 0);
    }

    #[test]
    fn test_max_sentences_override() {
        let summary = FrequencySummarizer::new().with_max_sentences(1).summarize(ANIMALS);
        assert_eq!(summary, "Great animals make great companions.");
    }
}
