//! `generateContent` response model and summary extraction.
//!
//! Extraction scans candidates, then parts within a candidate, in order,
//! and returns the first text with any non-whitespace content, untrimmed,
//! exactly as the upstream produced it. No such text is an extraction
//! failure, not a crash.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextPart {
    #[serde(default)]
    pub text: String,
}

/// Extract the first non-empty summary text from a raw response body.
pub fn extract_summary(body: &[u8]) -> Option<String> {
    let response: GenerateResponse = serde_json::from_slice(body).ok()?;
    response
        .candidates
        .into_iter()
        .flat_map(|candidate| candidate.content.parts)
        .find(|part| !part.text.trim().is_empty())
        .map(|part| part.text)
}
