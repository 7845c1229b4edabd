//! Generative explanation upstream.
//!
//! Everything specific to the Vertex-style `generateContent` API: prompt and
//! request payload construction, endpoint URL derivation, response summary
//! extraction, and credential/project-id acquisition.

pub mod credentials;
pub mod endpoint;
pub mod metadata;
pub mod prompt;
pub mod response;

pub use credentials::{CredentialError, StaticTokenProvider, TokenProvider};
pub use metadata::MetadataClient;
