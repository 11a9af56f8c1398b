// lai-summarizer/crates/lai-summarizer/src/metrics.rs

use prometheus::{Encoder, TextEncoder, Registry, IntCounterVec, Histogram, HistogramOpts};
use lazy_static::lazy_static;
use std::sync::OnceLock;
use axum::response::IntoResponse;
use axum::http::StatusCode;
use tracing::error;

lazy_static! {
    static ref REGISTRY: Registry = Registry::new();
}

static REQ_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();
static SUMMARY_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();
static SUMMARIZE_DURATION: OnceLock<Histogram> = OnceLock::new();
static INPUT_CHARS: OnceLock<Histogram> = OnceLock::new();

pub fn init_metrics() {
    if let Err(e) = try_init_metrics() {
        error!("Failed to initialize metrics: {}", e);
    }
}

fn try_init_metrics() -> prometheus::Result<()> {
    if REQ_COUNTER.get().is_none() {
        let counter = IntCounterVec::new(
            prometheus::opts!("requests_total", "Total requests per route"),
            &["route", "status"],
        )?;
        REGISTRY.register(Box::new(counter.clone()))?;
        let _ = REQ_COUNTER.set(counter);
    }

    if SUMMARY_COUNTER.get().is_none() {
        let counter = IntCounterVec::new(
            prometheus::opts!("summaries_total", "Summaries produced per strategy"),
            &["strategy"],
        )?;
        REGISTRY.register(Box::new(counter.clone()))?;
        let _ = SUMMARY_COUNTER.set(counter);
    }

    if SUMMARIZE_DURATION.get().is_none() {
        let histogram = Histogram::with_opts(
            HistogramOpts::new("summarize_duration_seconds", "Time spent producing a summary")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;
        REGISTRY.register(Box::new(histogram.clone()))?;
        let _ = SUMMARIZE_DURATION.set(histogram);
    }

    if INPUT_CHARS.get().is_none() {
        let histogram = Histogram::with_opts(
            HistogramOpts::new("input_chars", "Characters per accepted document")
                .buckets(prometheus::exponential_buckets(50.0, 2.0, 10)?),
        )?;
        REGISTRY.register(Box::new(histogram.clone()))?;
        let _ = INPUT_CHARS.set(histogram);
    }

    Ok(())
}

pub fn inc_request(route: &str, status: &str) {
    if let Some(counter) = REQ_COUNTER.get() {
        counter.with_label_values(&[route, status]).inc();
    }
}

pub fn inc_summary(strategy: &str) {
    if let Some(counter) = SUMMARY_COUNTER.get() {
        counter.with_label_values(&[strategy]).inc();
    }
}

pub fn observe_summarize_duration(seconds: f64) {
    if let Some(histogram) = SUMMARIZE_DURATION.get() {
        histogram.observe(seconds);
    }
}

pub fn observe_input_chars(chars: usize) {
    if let Some(histogram) = INPUT_CHARS.get() {
        histogram.observe(chars as f64);
    }
}

pub async fn get_metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; version=0.0.4")],
            Vec::new(),
        );
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        buffer,
    )
}
