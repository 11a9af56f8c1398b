// lai-summarizer/crates/lai-summarizer/src/telemetry.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Server logging: `RUST_LOG` or `info`.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Install the global subscriber, falling back to `default_filter` when
/// `RUST_LOG` is unset. Output goes to stderr so CLI stdout stays clean.
pub fn init_tracing_with_default(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
