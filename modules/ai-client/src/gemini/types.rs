use serde::{Deserialize, Serialize};

// =============================================================================
// Content
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
            role: None,
        }
    }
}

// =============================================================================
// Generate Content Request
// =============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single-turn request whose only content part is `prompt`.
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
        }
    }
}

// =============================================================================
// Generate Content Response
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}
