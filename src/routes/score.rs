//! Score route: guarded passthrough to the ML scoring upstream.
//!
//! Linear pipeline: correlation id, optional auth gate, body guard,
//! upstream resolution, one bounded `/predict` call, verbatim passthrough.
//! Guard failures stop the pipeline with a mapped error; upstream statuses
//! are never reinterpreted.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::response::Response;

use crate::auth;
use crate::error::ApiError;
use crate::http::body::read_json_body;
use crate::http::request::RequestContext;
use crate::http::server::AppState;
use crate::routes::{error_reply, passthrough_reply};
use crate::upstream::UpstreamOutcome;

pub async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let ctx = RequestContext::from_headers(request.headers());
    let config = &state.config;
    let (parts, body) = request.into_parts();

    if config.auth.score_requires_key {
        if let Err(err) = auth::authorize(config.auth.api_key.as_deref(), &parts.headers) {
            return error_reply(&ctx, err, 0);
        }
    }

    let body = match read_json_body(&parts.headers, body, config.limits.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => return error_reply(&ctx, err.into(), 0),
    };

    let Some(base) = config.ml.base_url.as_deref() else {
        return error_reply(&ctx, ApiError::MisconfiguredUpstream, 0);
    };
    let url = format!("{}/predict", base.trim_end_matches('/'));

    let dispatch = state
        .dispatcher
        .post_json(
            &url,
            body,
            &ctx.id,
            None,
            Duration::from_secs(config.ml.timeout_secs),
        )
        .await;

    match dispatch.outcome {
        UpstreamOutcome::Success {
            status,
            content_type,
            body,
        } => passthrough_reply(&ctx, status, content_type, body, dispatch.upstream_ms),
        UpstreamOutcome::Failure => {
            error_reply(&ctx, ApiError::UpstreamFailure, dispatch.upstream_ms)
        }
        UpstreamOutcome::Timeout => {
            error_reply(&ctx, ApiError::UpstreamTimeout, dispatch.upstream_ms)
        }
    }
}
