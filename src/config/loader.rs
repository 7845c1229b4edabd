//! Configuration loading from the environment.
//!
//! Values are trimmed and empty strings are normalized to "unset" here, at
//! the boundary; the rest of the pipeline only ever sees `Option<String>`.
//! Loading goes through an injectable lookup function so tests never mutate
//! process-wide environment state.

use crate::config::schema::GatewayConfig;

impl GatewayConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GatewayConfig::default();

        if let Some(port) = non_empty(lookup("PORT")) {
            config.listener.bind_address = format!("0.0.0.0:{port}");
        }

        config.auth.api_key = non_empty(lookup("API_KEY"));
        if let Some(flag) = non_empty(lookup("SCORE_REQUIRE_API_KEY")) {
            config.auth.score_requires_key = parse_flag(&flag, config.auth.score_requires_key);
        }

        if let Some(bytes) = non_empty(lookup("MAX_BODY_BYTES")) {
            if let Ok(n) = bytes.parse::<usize>() {
                if n > 0 {
                    config.limits.max_body_bytes = n;
                }
            }
        }

        config.ml.base_url =
            non_empty(lookup("API_ML_URL")).map(|url| url.trim_end_matches('/').to_string());

        if let Some(region) = non_empty(lookup("VERTEX_REGION")) {
            config.vertex.region = region;
        }
        if let Some(model) = non_empty(lookup("VERTEX_MODEL")) {
            config.vertex.model = model;
        }
        config.vertex.project_id = non_empty(lookup("PROJECT_ID"));
        config.vertex.endpoint = non_empty(lookup("VERTEX_ENDPOINT"));

        if let Some(host) = non_empty(lookup("METADATA_HOST")) {
            config.metadata.base_url = host;
        }

        if let Some(level) = non_empty(lookup("LOG_LEVEL")) {
            config.observability.log_level = level;
        }

        config
    }
}

/// Trim a looked-up value, mapping empty results to `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str, fallback: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> GatewayConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.auth.api_key, None);
        assert!(config.auth.score_requires_key);
        assert_eq!(config.limits.max_body_bytes, 1 << 20);
        assert_eq!(config.ml.base_url, None);
        assert_eq!(config.vertex.region, "us-central1");
        assert_eq!(config.vertex.model, "gemini-2.5-flash-lite");
        assert_eq!(config.ml.timeout_secs, 3);
        assert_eq!(config.vertex.timeout_secs, 10);
        assert_eq!(config.metadata.timeout_secs, 2);
    }

    #[test]
    fn empty_values_are_treated_as_unset() {
        let config = load(&[("API_KEY", "   "), ("PROJECT_ID", ""), ("VERTEX_REGION", "")]);
        assert_eq!(config.auth.api_key, None);
        assert_eq!(config.vertex.project_id, None);
        assert_eq!(config.vertex.region, "us-central1");
    }

    #[test]
    fn overrides_are_applied_and_trimmed() {
        let config = load(&[
            ("PORT", "9000"),
            ("API_KEY", " secret "),
            ("API_ML_URL", "http://ml.internal/"),
            ("MAX_BODY_BYTES", "2048"),
            ("VERTEX_REGION", "global"),
            ("SCORE_REQUIRE_API_KEY", "false"),
        ]);
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
        assert_eq!(config.auth.api_key.as_deref(), Some("secret"));
        assert_eq!(config.ml.base_url.as_deref(), Some("http://ml.internal"));
        assert_eq!(config.limits.max_body_bytes, 2048);
        assert_eq!(config.vertex.region, "global");
        assert!(!config.auth.score_requires_key);
    }

    #[test]
    fn invalid_body_cap_keeps_default() {
        let config = load(&[("MAX_BODY_BYTES", "0")]);
        assert_eq!(config.limits.max_body_bytes, 1 << 20);
        let config = load(&[("MAX_BODY_BYTES", "lots")]);
        assert_eq!(config.limits.max_body_bytes, 1 << 20);
    }
}
