//! API-key authentication gate.
//!
//! The gate only produces an outcome; emitting the response and logging are
//! the caller's responsibility. A missing server-side key is a distinct
//! condition from a client mismatch: the former is a 500-class
//! misconfiguration, the latter a plain 401.

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the caller's credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Three-way outcome of the credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credential matches the configured key.
    Authorized,
    /// Credential absent or mismatched.
    Unauthorized,
    /// No expected key configured on the server.
    Misconfigured,
}

/// Compare a presented credential against the configured one.
pub fn check_api_key(expected: Option<&str>, presented: Option<&str>) -> AuthOutcome {
    match expected {
        None => AuthOutcome::Misconfigured,
        Some(expected) if presented == Some(expected) => AuthOutcome::Authorized,
        Some(_) => AuthOutcome::Unauthorized,
    }
}

/// Run the gate against request headers, mapping failures to the error
/// taxonomy.
pub fn authorize(expected: Option<&str>, headers: &HeaderMap) -> Result<(), ApiError> {
    let presented = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    match check_api_key(expected, presented) {
        AuthOutcome::Authorized => Ok(()),
        AuthOutcome::Unauthorized => Err(ApiError::InvalidApiKey),
        AuthOutcome::Misconfigured => Err(ApiError::MisconfiguredApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn matching_key_is_authorized() {
        assert_eq!(
            check_api_key(Some("secret"), Some("secret")),
            AuthOutcome::Authorized
        );
    }

    #[test]
    fn mismatch_and_absence_are_unauthorized() {
        assert_eq!(
            check_api_key(Some("secret"), Some("wrong")),
            AuthOutcome::Unauthorized
        );
        assert_eq!(check_api_key(Some("secret"), None), AuthOutcome::Unauthorized);
    }

    #[test]
    fn missing_server_key_is_misconfigured_regardless_of_client() {
        assert_eq!(check_api_key(None, Some("anything")), AuthOutcome::Misconfigured);
        assert_eq!(check_api_key(None, None), AuthOutcome::Misconfigured);
    }

    #[test]
    fn authorize_reads_the_header() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("secret"));
        assert!(authorize(Some("secret"), &headers).is_ok());
        assert_eq!(
            authorize(Some("other"), &headers),
            Err(ApiError::InvalidApiKey)
        );
        assert_eq!(authorize(None, &headers), Err(ApiError::MisconfiguredApiKey));
    }
}
