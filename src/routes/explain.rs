//! Explain route: metric summarization via the generative upstream.
//!
//! Pipeline: correlation id, auth gate, body guard, payload decode, project
//! id resolution, prompt construction, credential acquisition, one bounded
//! `generateContent` call, summary extraction. Non-2xx upstream responses
//! pass through verbatim; a 2xx with no usable text is an extraction
//! failure.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

use crate::auth;
use crate::error::ApiError;
use crate::http::body::read_json_body;
use crate::http::request::RequestContext;
use crate::http::server::AppState;
use crate::routes::{error_reply, json_reply, passthrough_reply};
use crate::upstream::UpstreamOutcome;
use crate::vertex::endpoint::generate_content_url;
use crate::vertex::metadata::resolve_project_id;
use crate::vertex::prompt::{build_prompt, ExplainPayload, GenerateRequest};
use crate::vertex::response::extract_summary;

/// Success body: the resolved model and region, not client input.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub summary: String,
    pub model: String,
    pub region: String,
}

pub async fn handle(State(state): State<AppState>, request: Request) -> Response {
    let ctx = RequestContext::from_headers(request.headers());
    let config = &state.config;
    let (parts, body) = request.into_parts();

    if let Err(err) = auth::authorize(config.auth.api_key.as_deref(), &parts.headers) {
        return error_reply(&ctx, err, 0);
    }

    let body = match read_json_body(&parts.headers, body, config.limits.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => return error_reply(&ctx, err.into(), 0),
    };

    // Decode failure is indistinguishable from an unreadable body to the
    // client.
    let payload: ExplainPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return error_reply(&ctx, ApiError::InvalidBody, 0),
    };

    let region = config.vertex.region.as_str();
    let model = config.vertex.model.as_str();

    let project_id = match resolve_project_id(config.vertex.project_id.as_deref(), &state.metadata)
        .await
    {
        Ok(id) => id,
        Err(err) => {
            tracing::warn!(request_id = %ctx.id, error = %err, "project id resolution failed");
            return error_reply(&ctx, ApiError::MisconfiguredProjectId, 0);
        }
    };

    let generate = GenerateRequest::from_prompt(build_prompt(&payload));
    let request_body = match serde_json::to_vec(&generate) {
        Ok(bytes) => Bytes::from(bytes),
        Err(_) => return error_reply(&ctx, ApiError::VertexRequestMarshalFailure, 0),
    };

    let token = match state.tokens.access_token().await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(request_id = %ctx.id, error = %err, "credential acquisition failed");
            return error_reply(&ctx, ApiError::VertexAuthFailure, 0);
        }
    };

    let url = match generate_content_url(
        &project_id,
        region,
        model,
        config.vertex.endpoint.as_deref(),
    ) {
        Ok(url) => url,
        Err(_) => return error_reply(&ctx, ApiError::VertexRequestBuildFailure, 0),
    };

    let dispatch = state
        .dispatcher
        .post_json(
            url.as_str(),
            request_body,
            &ctx.id,
            Some(&token),
            Duration::from_secs(config.vertex.timeout_secs),
        )
        .await;

    let (status, content_type, body) = match dispatch.outcome {
        UpstreamOutcome::Success {
            status,
            content_type,
            body,
        } => (status, content_type, body),
        UpstreamOutcome::Failure => {
            return error_reply(&ctx, ApiError::VertexUpstreamFailure, dispatch.upstream_ms)
        }
        UpstreamOutcome::Timeout => {
            return error_reply(&ctx, ApiError::VertexUpstreamTimeout, dispatch.upstream_ms)
        }
    };

    if !status.is_success() {
        return passthrough_reply(&ctx, status, content_type, body, dispatch.upstream_ms);
    }

    let Some(summary) = extract_summary(&body) else {
        return error_reply(&ctx, ApiError::VertexInvalidResponse, dispatch.upstream_ms);
    };

    json_reply(
        &ctx,
        StatusCode::OK,
        ExplainResponse {
            summary,
            model: model.to_string(),
            region: region.to_string(),
        },
        dispatch.upstream_ms,
    )
}

/// CORS/metadata preflight; no auth check.
pub async fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (header::ALLOW, "OPTIONS, POST"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "OPTIONS, POST"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type,X-API-Key",
            ),
        ],
    )
        .into_response()
}
