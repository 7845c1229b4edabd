//! Embedded demo page.
//!
//! The demo is a single self-contained page compiled into the binary, so
//! the gateway ships with no filesystem dependencies. `/demo` and the
//! index aliases under `/demo/` serve the page; anything else is a 404.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

const DEMO_PAGE: &str = include_str!("../../assets/demo.html");

pub async fn index() -> Response {
    Html(DEMO_PAGE).into_response()
}

pub async fn asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path == "index.html" || path == "demo.html" {
        Html(DEMO_PAGE).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
