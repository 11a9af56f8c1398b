//! HTTP server for the summarizer
//!
//! Handlers share an [`AppState`] through Axum state; the summarizers run
//! in-process, so there are no outbound calls.

use anyhow::Context;
use std::time::Duration;
use tracing::info;

use crate::{
    config::Config,
    shared_state::AppState,
};

/// Request bodies above this size are rejected before JSON parsing
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Run the HTTP server until it fails or the process exits
pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    crate::metrics::init_metrics();
    cfg.print_config();

    let addr = cfg.api_addr()?;
    let state = AppState::new(cfg);

    info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let app = build_router(state);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
pub fn build_router(state: AppState) -> axum::Router {
    use axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    };
    use tower_http::{
        cors::{Any, CorsLayer},
        trace::TraceLayer,
        timeout::TimeoutLayer,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);

    let timeout = Duration::from_secs(state.config.request_timeout_seconds);

    Router::new()
        .route("/summarize", post(crate::api::summarize_api::summarize))
        .route("/summarize/batch", post(crate::api::summarize_api::summarize_batch_handler))
        .route("/status", get(crate::api::admin_api::get_status))
        .route("/healthz", get(crate::api::admin_api::health))
        .route("/metrics", get(crate::metrics::get_metrics))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}
