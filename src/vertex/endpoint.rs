//! Generative endpoint URL construction.
//!
//! The host is derived from the region, except for the `"global"` sentinel
//! which selects the bare host form (a deliberate special case of the API,
//! not a bug). Project, region, and model are path-escaped into the fixed
//! URL template. An explicit endpoint override replaces the scheme+host,
//! keeping the template path.

use url::Url;

/// Region sentinel selecting the region-less host.
pub const GLOBAL_REGION: &str = "global";

/// The endpoint URL could not be built from the given parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid generative endpoint parts")]
pub struct EndpointError;

/// Build the `generateContent` URL for a project, region, and model.
pub fn generate_content_url(
    project: &str,
    region: &str,
    model: &str,
    endpoint_override: Option<&str>,
) -> Result<Url, EndpointError> {
    let base = match endpoint_override {
        Some(endpoint) => endpoint.to_string(),
        None if region == GLOBAL_REGION => "https://aiplatform.googleapis.com".to_string(),
        None => format!("https://{region}-aiplatform.googleapis.com"),
    };

    let mut url = Url::parse(&base).map_err(|_| EndpointError)?;
    let model_call = format!("{model}:generateContent");
    url.path_segments_mut()
        .map_err(|_| EndpointError)?
        .pop_if_empty()
        .extend([
            "v1",
            "projects",
            project,
            "locations",
            region,
            "publishers",
            "google",
            "models",
            model_call.as_str(),
        ]);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_host_form() {
        let url = generate_content_url("demo-project", "us-central1", "gemini-2.5-flash-lite", None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/demo-project\
             /locations/us-central1/publishers/google/models/gemini-2.5-flash-lite:generateContent"
        );
    }

    #[test]
    fn global_sentinel_selects_bare_host() {
        let url = generate_content_url("demo-project", "global", "gemini-2.5-flash-lite", None)
            .unwrap();
        assert_eq!(url.host_str(), Some("aiplatform.googleapis.com"));
        assert!(url.path().contains("/locations/global/"));
    }

    #[test]
    fn parts_are_path_escaped() {
        let url = generate_content_url("my project", "us-central1", "model/x", None).unwrap();
        assert!(url.path().contains("/projects/my%20project/"));
        assert!(url.path().contains("/models/model%2Fx:generateContent"));
    }

    #[test]
    fn override_replaces_scheme_and_host() {
        let url = generate_content_url(
            "p",
            "us-central1",
            "m",
            Some("http://127.0.0.1:9999"),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9999/v1/projects/p/locations/us-central1\
             /publishers/google/models/m:generateContent"
        );
    }

    #[test]
    fn unparseable_region_host_is_an_error() {
        assert!(generate_content_url("p", "not a region", "m", None).is_err());
    }
}
