//! Gateway configuration.
//!
//! `schema` defines the configuration structure; `loader` fills it from
//! environment variables. Configuration is resolved once at startup and
//! treated as read-only for the life of the process.

pub mod loader;
pub mod schema;

pub use schema::GatewayConfig;
