// lai-summarizer/crates/lai-summarizer/src/lib.rs

pub mod config;
pub mod error;
pub mod summarizer;
pub mod telemetry;
pub mod utils;

#[cfg(feature = "cli")]
pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod metrics;
#[cfg(feature = "cli")]
pub mod server;
#[cfg(feature = "cli")]
pub mod shared_state;

// Public API exports
pub use config::Config;
pub use error::SummarizeError;
pub use summarizer::{
    summarize, summarize_batch, FrequencySummarizer, InputPolicy, Strategy, Summarizer, Summary,
    TruncateSummarizer,
};

#[cfg(feature = "cli")]
pub use server::{build_router, run_server};
