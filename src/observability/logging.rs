//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Emit exactly one structured line per request: correlation id, final
//!   status, upstream latency
//!
//! # Design Decisions
//! - The pipeline only supplies fields; formatting and transport belong to
//!   the subscriber
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "score_gateway={log_level},tower_http=warn"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Emit the per-request log line.
///
/// `upstream_ms` is 0 when no outbound call was attempted.
pub fn log_request(request_id: &str, status: u16, upstream_ms: u64) {
    tracing::info!(
        target: "score_gateway::request",
        request_id = %request_id,
        status,
        upstream_ms,
        "request completed"
    );
}
