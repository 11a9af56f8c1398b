// Summarization API: validate the submitted text against the input policy,
// then run the requested strategy inline (single) or on the blocking pool (batch)
use axum::{
    extract::{State, Json},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn, error};
use uuid::Uuid;

use crate::error::SummarizeError;
use crate::metrics;
use crate::shared_state::AppState;
use crate::summarizer::{summarize_batch, Strategy, Summarizer, Summary};
use crate::utils::TextUtils;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub strategy: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub id: Uuid,
    pub summary: String,
    pub strategy: Strategy,
    pub sentence_count: usize,
    pub selected: Vec<String>,
    pub input_chars: usize,
    pub generated_at: DateTime<Utc>,
}

impl SummarizeResponse {
    fn from_summary(summary: Summary, input_chars: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary: summary.text,
            strategy: summary.strategy,
            sentence_count: summary.sentence_count,
            selected: summary.selected,
            input_chars,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchSummarizeRequest {
    pub texts: Vec<String>,
    #[serde(default)]
    pub strategy: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummarizeResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

#[derive(Debug, Serialize)]
pub struct BatchSummarizeResponse {
    pub results: Vec<BatchItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&SummarizeError> for ErrorResponse {
    fn from(e: &SummarizeError) -> Self {
        Self {
            error: e.to_string(),
            code: e.code(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(state: &AppState, route: &str, e: SummarizeError) -> ApiError {
    state.counters.inc_rejected();
    metrics::inc_request(route, e.code());
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&e)))
}

/// Single-line excerpt of user text for log messages
fn preview(text: &str) -> String {
    TextUtils::truncate_with_ellipsis(&TextUtils::normalize_whitespace(text), 40).into_owned()
}

fn parse_strategy(raw: Option<&str>) -> Result<Option<Strategy>, SummarizeError> {
    raw.map(str::parse::<Strategy>).transpose()
}

/// Summarize one document.
/// Input is trimmed and must meet the configured minimum length.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    state.counters.inc_total_requests();
    info!(
        "Summarize request (length: {} chars, {} words)",
        TextUtils::char_len(&req.text),
        TextUtils::count_words(&req.text)
    );

    let strategy = parse_strategy(req.strategy.as_deref())
        .map_err(|e| bad_request(&state, "summarize", e))?;
    let text = state
        .input_policy()
        .validate(&req.text)
        .map_err(|e| {
            warn!("Rejected summarize input \"{}\": {}", preview(&req.text), e);
            bad_request(&state, "summarize", e)
        })?;

    let summarizer = state.summarizer_for(strategy);
    let input_chars = TextUtils::char_len(text);
    let started = Instant::now();
    let summary = summarizer.summarize_document(text);
    metrics::observe_summarize_duration(started.elapsed().as_secs_f64());
    metrics::observe_input_chars(input_chars);
    metrics::inc_summary(summarizer.name());
    metrics::inc_request("summarize", "ok");
    state.counters.inc_summaries();

    info!(
        "Generated {} summary: {} of {} sentences",
        summary.strategy,
        summary.selected.len(),
        summary.sentence_count
    );

    Ok(Json(SummarizeResponse::from_summary(summary, input_chars)))
}

/// Summarize several documents; each one is validated on its own and
/// invalid entries come back as per-item errors.
pub async fn summarize_batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchSummarizeRequest>,
) -> Result<Json<BatchSummarizeResponse>, ApiError> {
    state.counters.inc_total_requests();
    info!("Batch summarize request ({} documents)", req.texts.len());

    let max = state.config.max_batch_size;
    if req.texts.len() > max {
        return Err(bad_request(
            &state,
            "summarize_batch",
            SummarizeError::BatchTooLarge { max, actual: req.texts.len() },
        ));
    }

    let strategy = parse_strategy(req.strategy.as_deref())
        .map_err(|e| bad_request(&state, "summarize_batch", e))?;

    let worker_state = state.clone();
    let texts = req.texts;
    let outcome = tokio::task::spawn_blocking(move || {
        let policy = worker_state.input_policy();
        let validated: Vec<Result<&str, SummarizeError>> =
            texts.iter().map(|t| policy.validate(t)).collect();
        let accepted: Vec<&str> = validated.iter().filter_map(|r| r.as_ref().ok().copied()).collect();

        let summarizer = worker_state.summarizer_for(strategy);
        let started = Instant::now();
        let mut summaries = summarize_batch(summarizer.as_ref(), &accepted).into_iter();
        metrics::observe_summarize_duration(started.elapsed().as_secs_f64());

        validated
            .into_iter()
            .map(|result| match result {
                Ok(text) => {
                    let input_chars = TextUtils::char_len(text);
                    metrics::observe_input_chars(input_chars);
                    metrics::inc_summary(summarizer.name());
                    worker_state.counters.inc_summaries();
                    BatchItem {
                        summary: summaries
                            .next()
                            .map(|s| SummarizeResponse::from_summary(s, input_chars)),
                        error: None,
                    }
                }
                Err(e) => {
                    worker_state.counters.inc_rejected();
                    BatchItem {
                        summary: None,
                        error: Some(ErrorResponse::from(&e)),
                    }
                }
            })
            .collect::<Vec<_>>()
    })
    .await;

    match outcome {
        Ok(results) => {
            metrics::inc_request("summarize_batch", "ok");
            let total = results.len();
            Ok(Json(BatchSummarizeResponse { results, total }))
        }
        Err(e) => {
            error!("Batch summarization task failed: {}", e);
            metrics::inc_request("summarize_batch", "error");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Batch summarization failed: {}", e),
                    code: "internal",
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const ANIMALS: &str = "Cats are great. Dogs are great too. Birds can be great pets as well. Great animals make great companions.";

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    #[test]
    fn test_preview_is_single_line_and_bounded() {
        let p = preview("line one\nline two   and a lot more text that keeps going on");
        assert!(!p.contains('\n'));
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 40);
    }

    #[tokio::test]
    async fn test_summarize_ok() {
        let state = state();
        let req = SummarizeRequest { text: format!("  {}  ", ANIMALS), strategy: None };
        let Json(resp) = summarize(State(state.clone()), Json(req)).await.unwrap();

        assert_eq!(resp.summary, "Great animals make great companions. Cats are great. Dogs are great too.");
        assert_eq!(resp.strategy, Strategy::Frequency);
        assert_eq!(resp.sentence_count, 4);
        assert_eq!(resp.input_chars, ANIMALS.chars().count());
        assert_eq!(state.counters.snapshot().summaries_produced, 1);
    }

    #[tokio::test]
    async fn test_summarize_rejects_short_text() {
        let state = state();
        let req = SummarizeRequest { text: "Too short.".into(), strategy: None };
        let (status, Json(body)) = summarize(State(state.clone()), Json(req)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Please enter at least 50 characters for summarization");
        assert_eq!(body.code, "too_short");
        assert_eq!(state.counters.snapshot().rejected_inputs, 1);
    }

    #[tokio::test]
    async fn test_summarize_rejects_unknown_strategy() {
        let req = SummarizeRequest { text: ANIMALS.into(), strategy: Some("magic".into()) };
        let (status, Json(body)) = summarize(State(state()), Json(req)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "unknown_strategy");
    }

    #[tokio::test]
    async fn test_summarize_truncate_strategy() {
        let req = SummarizeRequest { text: ANIMALS.into(), strategy: Some("truncate".into()) };
        let Json(resp) = summarize(State(state()), Json(req)).await.unwrap();

        assert_eq!(resp.strategy, Strategy::Truncate);
        assert_eq!(resp.summary, ANIMALS);
    }

    #[tokio::test]
    async fn test_batch_mixes_results_and_errors() {
        let req = BatchSummarizeRequest {
            texts: vec![ANIMALS.into(), "".into(), "short".into()],
            strategy: None,
        };
        let Json(resp) = summarize_batch_handler(State(state()), Json(req)).await.unwrap();

        assert_eq!(resp.total, 3);
        assert!(resp.results[0].summary.is_some());
        assert_eq!(resp.results[1].error.as_ref().map(|e| e.code), Some("empty_input"));
        assert_eq!(resp.results[2].error.as_ref().map(|e| e.code), Some("too_short"));
    }

    #[tokio::test]
    async fn test_batch_limit() {
        let mut config = Config::default();
        config.max_batch_size = 1;
        let req = BatchSummarizeRequest {
            texts: vec![ANIMALS.into(), ANIMALS.into()],
            strategy: None,
        };
        let (status, Json(body)) =
            summarize_batch_handler(State(AppState::new(config)), Json(req)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "batch_too_large");
    }
}
