//! Client-facing error taxonomy.
//!
//! Every failure branch in the pipeline terminates in exactly one of these
//! variants. Each carries a fixed HTTP status, a stable machine-readable
//! reason code, and a human message; nothing is retried or aggregated.

use axum::http::StatusCode;
use serde::Serialize;

/// Terminal pipeline errors surfaced to the client.
///
/// Non-2xx responses from a reachable upstream are deliberately absent here:
/// those are passed through verbatim, preserving the upstream's own error
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No expected API key is configured on the server.
    #[error("server misconfigured")]
    MisconfiguredApiKey,

    /// The presented API key does not match the configured one.
    #[error("unauthorized")]
    InvalidApiKey,

    /// Request content type is not `application/json`.
    #[error("unsupported media")]
    UnsupportedMediaType,

    /// Body unreadable, over the size cap, or undecodable.
    #[error("invalid body")]
    InvalidBody,

    /// No ML upstream base URL is configured.
    #[error("server misconfigured")]
    MisconfiguredUpstream,

    /// Non-timeout transport failure talking to the ML upstream.
    #[error("ml upstream error")]
    UpstreamFailure,

    /// The ML upstream call exceeded its timeout budget.
    #[error("ml upstream timeout")]
    UpstreamTimeout,

    /// Project id neither configured nor resolvable from metadata.
    #[error("server misconfigured")]
    MisconfiguredProjectId,

    /// Serializing the generative request payload failed.
    #[error("internal error")]
    VertexRequestMarshalFailure,

    /// Could not acquire a credential for the generative upstream.
    #[error("vertex auth error")]
    VertexAuthFailure,

    /// The generative endpoint URL could not be constructed.
    #[error("vertex upstream error")]
    VertexRequestBuildFailure,

    /// Non-timeout transport failure talking to the generative upstream.
    #[error("vertex upstream error")]
    VertexUpstreamFailure,

    /// The generative upstream call exceeded its timeout budget.
    #[error("vertex upstream timeout")]
    VertexUpstreamTimeout,

    /// The generative upstream answered 2xx but carried no usable text.
    #[error("vertex upstream error")]
    VertexInvalidResponse,
}

/// Fixed JSON envelope for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub reason_code: &'static str,
}

impl ApiError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MisconfiguredApiKey
            | ApiError::MisconfiguredUpstream
            | ApiError::MisconfiguredProjectId
            | ApiError::VertexRequestMarshalFailure
            | ApiError::VertexAuthFailure => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFailure
            | ApiError::VertexRequestBuildFailure
            | ApiError::VertexUpstreamFailure
            | ApiError::VertexInvalidResponse => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamTimeout | ApiError::VertexUpstreamTimeout => {
                StatusCode::GATEWAY_TIMEOUT
            }
        }
    }

    /// Stable reason code, distinct from the HTTP status and human message.
    pub fn reason_code(&self) -> &'static str {
        match self {
            ApiError::MisconfiguredApiKey => "MISCONFIGURED_API_KEY",
            ApiError::InvalidApiKey => "INVALID_API_KEY",
            ApiError::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ApiError::InvalidBody => "INVALID_BODY",
            ApiError::MisconfiguredUpstream => "MISCONFIGURED_UPSTREAM",
            ApiError::UpstreamFailure => "UPSTREAM_FAILURE",
            ApiError::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            ApiError::MisconfiguredProjectId => "MISCONFIGURED_PROJECT_ID",
            ApiError::VertexRequestMarshalFailure => "VERTEX_REQUEST_MARSHAL_ERROR",
            ApiError::VertexAuthFailure => "VERTEX_AUTH_FAILURE",
            ApiError::VertexRequestBuildFailure => "VERTEX_REQUEST_BUILD_FAILURE",
            ApiError::VertexUpstreamFailure => "VERTEX_UPSTREAM_FAILURE",
            ApiError::VertexUpstreamTimeout => "VERTEX_UPSTREAM_TIMEOUT",
            ApiError::VertexInvalidResponse => "VERTEX_INVALID_RESPONSE",
        }
    }

    /// Build the response envelope for this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
            reason_code: self.reason_code(),
        }
    }
}
