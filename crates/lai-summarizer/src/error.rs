//! Caller-facing error types.
//!
//! The summarizer itself is total over `&str`. These errors cover the checks
//! callers run around it: input policy, strategy selection and batch limits.

use thiserror::Error;

/// Result alias for caller-side summarization operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// Input was empty after trimming.
    #[error("Please enter text to summarize")]
    EmptyInput,

    /// Input was shorter than the policy minimum.
    #[error("Please enter at least {min} characters for summarization")]
    TooShort { min: usize, actual: usize },

    /// Strategy name did not match any known strategy.
    #[error("unknown summary strategy: {0}")]
    UnknownStrategy(String),

    /// A batch request carried more documents than allowed.
    #[error("batch of {actual} documents exceeds the limit of {max}")]
    BatchTooLarge { max: usize, actual: usize },
}

impl SummarizeError {
    /// Stable machine-readable code, used in HTTP error bodies and metrics labels.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::TooShort { .. } => "too_short",
            Self::UnknownStrategy(_) => "unknown_strategy",
            Self::BatchTooLarge { .. } => "batch_too_large",
        }
    }
}
