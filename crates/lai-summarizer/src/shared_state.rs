//! Shared state for the HTTP handlers
//!
//! Configuration is read-only after startup; the only mutable parts are
//! lock-free counters.

use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
use std::time::Instant;
use tracing::info;

use crate::config::Config;
use crate::summarizer::{InputPolicy, Strategy, Summarizer};

/// Atomic counters for request accounting
#[derive(Debug, Default)]
pub struct AtomicCounters {
    pub total_requests: AtomicUsize,
    pub summaries_produced: AtomicUsize,
    pub rejected_inputs: AtomicUsize,
}

impl AtomicCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_total_requests(&self) -> usize {
        self.total_requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn inc_summaries(&self) -> usize {
        self.summaries_produced.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn inc_rejected(&self) -> usize {
        self.rejected_inputs.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            summaries_produced: self.summaries_produced.load(Ordering::Relaxed),
            rejected_inputs: self.rejected_inputs.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CounterSnapshot {
    pub total_requests: usize,
    pub summaries_produced: usize,
    pub rejected_inputs: usize,
}

/// Application state used by the Axum router
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub counters: Arc<AtomicCounters>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        info!("Initializing shared application state");
        Self {
            config: Arc::new(config),
            counters: Arc::new(AtomicCounters::new()),
            started_at: Instant::now(),
        }
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.config.input_policy()
    }

    /// Requested strategy, or the configured default
    pub fn summarizer_for(&self, requested: Option<Strategy>) -> Box<dyn Summarizer> {
        requested
            .unwrap_or(self.config.default_strategy)
            .summarizer(&self.config)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
