//! Outbound upstream dispatch.

pub mod dispatcher;

pub use dispatcher::{Dispatch, UpstreamDispatcher, UpstreamOutcome};
