//! Prompt construction and request payload types.
//!
//! The prompt is a fixed template over the four metric fields. Values are
//! formatted with plain `{}` so the text carries whatever the caller sent,
//! without rounding; out-of-range numbers are not rejected here.

use serde::{Deserialize, Serialize};

/// Metrics decoded from the explain request body.
///
/// Shape-only validation: missing fields default to zero, matching the
/// permissive decode the API has always had.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExplainPayload {
    pub score: f64,
    pub symmetry: f64,
    pub power: f64,
    pub consistency: f64,
}

/// `generateContent` request payload.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Render the instruction prompt for a set of metrics.
pub fn build_prompt(payload: &ExplainPayload) -> String {
    format!(
        "Summarize these metrics: score={}, symmetry={}, power={}, consistency={}. 1-2 sentences.",
        payload.score, payload.symmetry, payload.power, payload.consistency
    )
}

impl GenerateRequest {
    /// Wrap a prompt as a single user-role message part.
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}
