//! Request and response bodies of the `generateContent` endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub tools: Vec<Tool>,
}

impl<'a> GenerateRequest<'a> {
    /// Single user turn with Google Search grounding as the only tool
    pub fn grounded(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text parts of the first candidate joined together
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;

        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() { None } else { Some(text) }
    }

    /// Why the first candidate stopped, e.g. `STOP` or `SAFETY`
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
