//! HTTP server, per-request context, and body guarding.

pub mod body;
pub mod request;
pub mod server;

pub use server::{AppState, GatewayServer};
