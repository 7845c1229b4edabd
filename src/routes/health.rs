//! Liveness probe and ping acknowledgment.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// `GET/HEAD /healthz`: simple liveness.
pub async fn healthz() -> impl IntoResponse {
    "ok"
}

/// `GET /v1/ping`: fixed acknowledgment.
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "msg": "pong" }))
}
