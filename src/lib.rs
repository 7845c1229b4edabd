//! Score Gateway Library
//!
//! An HTTP gateway that mediates between client devices and two backends:
//! a synchronous ML scoring service and a generative-text explanation
//! service. Every request is authenticated, body-guarded, dispatched to the
//! right upstream under a timeout budget, and annotated with a correlation
//! id that is echoed back to the caller and attached to the request log line.

// Core subsystems
pub mod config;
pub mod error;
pub mod http;
pub mod routes;
pub mod upstream;

// Explanation upstream (prompt, endpoint, credentials)
pub mod vertex;

// Cross-cutting concerns
pub mod auth;
pub mod lifecycle;
pub mod observability;

pub use config::schema::GatewayConfig;
pub use error::ApiError;
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
