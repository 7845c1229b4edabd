//! Timeout-bounded upstream dispatch.
//!
//! One outbound call per invocation, no retries. Classification happens
//! here, at the dispatch boundary: the caller receives a tagged outcome and
//! never inspects transport error internals. A non-2xx status from a
//! reachable upstream is a `Success` at this layer; presentation is the
//! route's decision.
//!
//! The wrapped `reqwest::Client` is an immutable, concurrency-safe handle
//! constructed once at startup and shared across all simultaneous requests;
//! connection pooling is its responsibility. Cancellation composes with the
//! budget for free: the returned future is owned by the handler future, so
//! a client disconnect drops it and aborts the in-flight call.

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::header::{self, HeaderValue};
use reqwest::StatusCode;

use crate::http::request::REQUEST_ID_HEADER;

/// Tagged result of one outbound call.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// The upstream answered; status may be any class.
    Success {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },
    /// Transport-level failure other than a timeout (connect, DNS, TLS,
    /// body read).
    Failure,
    /// The timeout budget elapsed before the response completed.
    Timeout,
}

/// Outcome plus measured wall-clock latency of the call.
#[derive(Debug)]
pub struct Dispatch {
    pub outcome: UpstreamOutcome,
    pub upstream_ms: u64,
}

/// Performs single bounded outbound HTTP calls.
#[derive(Clone)]
pub struct UpstreamDispatcher {
    client: reqwest::Client,
}

impl UpstreamDispatcher {
    /// Wrap an existing shared client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// POST a JSON body to `url` under `budget`, forwarding the correlation
    /// id and optionally a bearer credential.
    pub async fn post_json(
        &self,
        url: &str,
        body: Bytes,
        request_id: &str,
        bearer: Option<&str>,
        budget: Duration,
    ) -> Dispatch {
        let mut request = self
            .client
            .post(url)
            .timeout(budget)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id)
            .body(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let outcome = match request.send().await {
            Ok(response) => {
                let status = response.status();
                let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
                match response.bytes().await {
                    Ok(body) => UpstreamOutcome::Success {
                        status,
                        content_type,
                        body,
                    },
                    Err(err) if err.is_timeout() => UpstreamOutcome::Timeout,
                    Err(_) => UpstreamOutcome::Failure,
                }
            }
            Err(err) if err.is_timeout() => UpstreamOutcome::Timeout,
            Err(_) => UpstreamOutcome::Failure,
        };

        Dispatch {
            outcome,
            upstream_ms: started.elapsed().as_millis() as u64,
        }
    }
}
