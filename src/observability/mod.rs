//! Observability: logging init and the per-request log line.

pub mod logging;
