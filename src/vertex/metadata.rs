//! Metadata-service client.
//!
//! Resolves the project id and default service-account tokens from the
//! environment's metadata endpoint. Every lookup carries its own timeout
//! budget; there is no caching, matching the per-request configuration
//! semantics of the rest of the pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::schema::MetadataConfig;
use crate::vertex::credentials::{CredentialError, TokenProvider};

const PROJECT_ID_PATH: &str = "/computeMetadata/v1/project/project-id";
const TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";
const FLAVOR_HEADER: &str = "metadata-flavor";

/// Metadata lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("metadata service returned {0}")]
    Status(StatusCode),

    #[error("empty project id from metadata service")]
    EmptyProjectId,
}

/// Client for the instance metadata service.
#[derive(Clone)]
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: String,
    budget: Duration,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl MetadataClient {
    pub fn new(client: reqwest::Client, base_url: String, budget: Duration) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            budget,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &MetadataConfig) -> Self {
        Self::new(
            client,
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Look up the project id of the surrounding environment.
    pub async fn project_id(&self) -> Result<String, MetadataError> {
        let response = self.get(PROJECT_ID_PATH).send().await?;
        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status()));
        }
        let id = response.text().await?.trim().to_string();
        if id.is_empty() {
            return Err(MetadataError::EmptyProjectId);
        }
        Ok(id)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header(FLAVOR_HEADER, "Google")
            .timeout(self.budget)
    }
}

/// Resolve the project id: configured override first, metadata lookup as
/// the fallback.
pub async fn resolve_project_id(
    configured: Option<&str>,
    metadata: &MetadataClient,
) -> Result<String, MetadataError> {
    if let Some(id) = configured {
        return Ok(id.to_string());
    }
    metadata.project_id().await
}

#[async_trait]
impl TokenProvider for MetadataClient {
    async fn access_token(&self) -> Result<String, CredentialError> {
        let response = self
            .get(TOKEN_PATH)
            .send()
            .await
            .map_err(|e| CredentialError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CredentialError(format!(
                "metadata token endpoint returned {}",
                response.status()
            )));
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialError(e.to_string()))?;
        if token.access_token.is_empty() {
            return Err(CredentialError("empty access token".to_string()));
        }
        Ok(token.access_token)
    }
}
