//! Per-request context and correlation-id resolution.
//!
//! Exactly one correlation id is assigned per request, before any other
//! processing, and echoed back in the `X-Request-Id` response header on
//! every exit path. A caller-supplied id is used unchanged; otherwise one
//! is generated from a high-resolution timestamp plus a random tiebreaker
//! so concurrent requests cannot collide.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::HeaderMap;

/// Header carrying the correlation id, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Facts derived from the request before the pipeline runs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for this request.
    pub id: String,
}

impl RequestContext {
    /// Resolve the correlation id from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generate_request_id);
        Self { id }
    }
}

fn generate_request_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!(
        "{}.{:09}-{:04x}",
        now.as_secs(),
        now.subsec_nanos(),
        fastrand::u16(..)
    )
}
