//! Administrative endpoints: liveness and a status snapshot of the service.
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use sysinfo::System;

use crate::metrics;
use crate::shared_state::{AppState, CounterSnapshot};
use crate::summarizer::Strategy;

#[derive(Debug, Serialize)]
pub struct SummarizerSettings {
    pub default_strategy: Strategy,
    pub min_input_chars: usize,
    pub summary_sentences: usize,
    pub truncate_words: usize,
    pub max_batch_size: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub counters: CounterSnapshot,
    pub settings: SummarizerSettings,
    pub memory_usage: Option<String>,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn get_status(
    State(state): State<AppState>,
) -> impl IntoResponse {
    let memory_usage = {
        let mut sys = System::new();
        sys.refresh_memory();
        let used = sys.used_memory();
        let total = sys.total_memory();
        if total > 0 {
            Some(format!("{}/{} MB", used / 1024 / 1024, total / 1024 / 1024))
        } else {
            None
        }
    };

    let cfg = &state.config;
    let response = StatusResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        counters: state.counters.snapshot(),
        settings: SummarizerSettings {
            default_strategy: cfg.default_strategy,
            min_input_chars: cfg.min_input_chars,
            summary_sentences: cfg.summary_sentences,
            truncate_words: cfg.truncate_words,
            max_batch_size: cfg.max_batch_size,
        },
        memory_usage,
    };

    metrics::inc_request("admin_status", "ok");
    (StatusCode::OK, Json(response))
}
