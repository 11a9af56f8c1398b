//! JavaScript bindings for the LAI summarizer using N-API
use napi::bindgen_prelude::*;
use napi_derive::napi;

use lai_summarizer::{InputPolicy, Strategy, Summarizer};

fn parse_strategy(strategy: Option<String>) -> Result<Strategy> {
    match strategy {
        Some(raw) => raw
            .parse::<Strategy>()
            .map_err(|e| Error::new(Status::InvalidArg, e.to_string())),
        None => Ok(Strategy::default()),
    }
}

#[napi(object)]
pub struct SummaryResult {
    pub summary: String,
    pub selected: Vec<String>,
    pub strategy: String,
    pub sentence_count: u32,
}

/// Summarize `text`; `strategy` is "frequency" (default) or "truncate"
#[napi]
pub fn summarize(text: String, strategy: Option<String>) -> Result<String> {
    Ok(parse_strategy(strategy)?.default_summarizer().summarize(&text))
}

#[napi]
pub fn summarize_document(text: String, strategy: Option<String>) -> Result<SummaryResult> {
    let summary = parse_strategy(strategy)?
        .default_summarizer()
        .summarize_document(&text);
    Ok(SummaryResult {
        summary: summary.text,
        selected: summary.selected,
        strategy: summary.strategy.to_string(),
        sentence_count: summary.sentence_count as u32,
    })
}

/// Throws when `text` is blank or shorter than `minChars` (default 50)
#[napi]
pub fn validate(text: String, min_chars: Option<u32>) -> Result<String> {
    let policy = min_chars
        .map(|n| InputPolicy::new(n as usize))
        .unwrap_or_default();
    policy
        .validate(&text)
        .map(str::to_owned)
        .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))
}

/// Get library version
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
