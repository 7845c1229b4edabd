//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits; defaults match production behavior so an
//! empty environment still yields a runnable (if misconfigured-for-auth)
//! process that reports its missing pieces per request.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// API-key authentication settings.
    pub auth: AuthConfig,

    /// Request body limits.
    pub limits: LimitConfig,

    /// ML scoring upstream.
    pub ml: MlUpstreamConfig,

    /// Generative explanation upstream.
    pub vertex: VertexConfig,

    /// Metadata service used to resolve project id and credentials.
    pub metadata: MetadataConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// API-key authentication configuration.
///
/// `api_key` is `None` when no credential is configured; authenticated
/// routes then answer 500 `MISCONFIGURED_API_KEY` rather than letting
/// anyone through.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Expected value of the `X-API-Key` header.
    pub api_key: Option<String>,

    /// Whether the score route requires the API key. The explain route
    /// always does.
    pub score_requires_key: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            score_requires_key: true,
        }
    }
}

/// Request body limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum request body size in bytes, enforced while reading.
    pub max_body_bytes: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1 << 20, // 1 MiB
        }
    }
}

/// ML scoring upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MlUpstreamConfig {
    /// Base URL of the scoring service; requests go to `{base}/predict`.
    pub base_url: Option<String>,

    /// Timeout budget for one scoring call, in seconds.
    pub timeout_secs: u64,
}

impl Default for MlUpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 3,
        }
    }
}

/// Generative explanation upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VertexConfig {
    /// Region hosting the model. The sentinel `"global"` selects the
    /// region-less host form.
    pub region: String,

    /// Model name used for generation.
    pub model: String,

    /// Project id override; when absent the metadata service is queried.
    pub project_id: Option<String>,

    /// Scheme+host override for the generative endpoint (private endpoints,
    /// test doubles). The standard host is derived from the region when
    /// unset.
    pub endpoint: Option<String>,

    /// Timeout budget for one generation call, in seconds.
    pub timeout_secs: u64,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            region: "us-central1".to_string(),
            model: "gemini-2.5-flash-lite".to_string(),
            project_id: None,
            endpoint: None,
            timeout_secs: 10,
        }
    }
}

/// Metadata service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Base URL of the metadata service.
    pub base_url: String,

    /// Timeout budget for one metadata lookup, in seconds.
    pub timeout_secs: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: "http://metadata.google.internal".to_string(),
            timeout_secs: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
