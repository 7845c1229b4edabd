//! Request body guarding.
//!
//! Enforces the `application/json` content type and a maximum body size.
//! The cap is applied while reading: a body exceeding it fails the read and
//! is never fully buffered in memory.

use axum::body::Body;
use axum::http::{header, HeaderMap};
use bytes::Bytes;

use crate::error::ApiError;

/// Guard failures, mapped to the error taxonomy at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyGuardError {
    /// Content type does not begin with `application/json`.
    UnsupportedMedia,
    /// Read failed or the size cap was exceeded.
    Unreadable,
}

impl From<BodyGuardError> for ApiError {
    fn from(err: BodyGuardError) -> Self {
        match err {
            BodyGuardError::UnsupportedMedia => ApiError::UnsupportedMediaType,
            BodyGuardError::Unreadable => ApiError::InvalidBody,
        }
    }
}

/// Check the declared content type and materialize the body under the cap.
pub async fn read_json_body(
    headers: &HeaderMap,
    body: Body,
    max_bytes: usize,
) -> Result<Bytes, BodyGuardError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !content_type.starts_with("application/json") {
        return Err(BodyGuardError::UnsupportedMedia);
    }

    axum::body::to_bytes(body, max_bytes)
        .await
        .map_err(|_| BodyGuardError::Unreadable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[tokio::test]
    async fn accepts_json_under_the_cap() {
        let body = Body::from(r#"{"score":1}"#);
        let bytes = read_json_body(&json_headers(), body, 1024).await.unwrap();
        assert_eq!(&bytes[..], br#"{"score":1}"#);
    }

    #[tokio::test]
    async fn accepts_json_with_charset_parameter() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(read_json_body(&headers, Body::from("{}"), 1024).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_non_json_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(
            read_json_body(&headers, Body::from("{}"), 1024).await,
            Err(BodyGuardError::UnsupportedMedia)
        );
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        assert_eq!(
            read_json_body(&HeaderMap::new(), Body::from("{}"), 1024).await,
            Err(BodyGuardError::UnsupportedMedia)
        );
    }

    #[tokio::test]
    async fn rejects_body_over_the_cap() {
        let body = Body::from(vec![b'x'; 64]);
        assert_eq!(
            read_json_body(&json_headers(), body, 16).await,
            Err(BodyGuardError::Unreadable)
        );
    }
}
