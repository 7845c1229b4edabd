//! Credential acquisition for the generative upstream.
//!
//! The token source is an injected capability handed to the server at
//! construction time, so tests substitute a double without any shared
//! mutable process state.

use async_trait::async_trait;

/// Credential acquisition failed.
#[derive(Debug, thiserror::Error)]
#[error("credential acquisition failed: {0}")]
pub struct CredentialError(pub String);

/// Source of bearer tokens for the generative upstream.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Produce a bearer token valid for the generative endpoint.
    async fn access_token(&self) -> Result<String, CredentialError>;
}

/// Fixed-token provider for tests and local development.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_its_token() {
        let provider = StaticTokenProvider::new("fixed");
        assert_eq!(provider.access_token().await.unwrap(), "fixed");
    }
}
