// lai-summarizer/src/api/mod.rs
//! API module - HTTP handlers in front of the summarizer

pub mod admin_api;
pub mod summarize_api;

// Re-export API handlers
pub use admin_api::{get_status, health, StatusResponse};
pub use summarize_api::{
    summarize, summarize_batch_handler, BatchSummarizeRequest, BatchSummarizeResponse,
    SummarizeRequest, SummarizeResponse,
};
