//! Route handlers and shared reply construction.
//!
//! Every handler resolves its `RequestContext` first and funnels all exit
//! paths through the helpers here, so the `X-Request-Id` echo and the
//! single per-request log line hold unconditionally.

pub mod demo;
pub mod explain;
pub mod health;
pub mod score;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::request::{RequestContext, REQUEST_ID_HEADER};
use crate::observability::logging;

/// Terminal error reply: envelope body, echo, log.
pub(crate) fn error_reply(ctx: &RequestContext, err: ApiError, upstream_ms: u64) -> Response {
    let status = err.status();
    let response = (status, Json(err.envelope())).into_response();
    finish(ctx, response, status, upstream_ms)
}

/// Forward an upstream's status, content type, and body verbatim.
pub(crate) fn passthrough_reply(
    ctx: &RequestContext,
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
    upstream_ms: u64,
) -> Response {
    let mut response = (status, body).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    finish(ctx, response, status, upstream_ms)
}

/// Terminal JSON success reply.
pub(crate) fn json_reply<T: Serialize>(
    ctx: &RequestContext,
    status: StatusCode,
    body: T,
    upstream_ms: u64,
) -> Response {
    let response = (status, Json(body)).into_response();
    finish(ctx, response, status, upstream_ms)
}

fn finish(
    ctx: &RequestContext,
    mut response: Response,
    status: StatusCode,
    upstream_ms: u64,
) -> Response {
    if let Ok(value) = HeaderValue::from_str(&ctx.id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    logging::log_request(&ctx.id, status.as_u16(), upstream_ms);
    response
}
