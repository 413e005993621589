use serde::{Deserialize, Serialize};
use serde_json::Number;

// =============================================================================
// Feature record
// =============================================================================

/// Cheap lexical signals derived from the raw text of a URL.
///
/// Field order is the serialization order, and the prompt relies on it
/// staying stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub url_length: usize,
    pub has_at_symbol: bool,
    pub uses_https: bool,
    pub dot_count: usize,
    pub contains_suspicious_words: bool,
}

// =============================================================================
// Verdict
// =============================================================================

/// The model's phishing assessment, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_phishing: bool,
    /// 0 to 100, kept exactly as the model wrote it (`87` stays `87`).
    pub confidence_score: Number,
    pub explanation: String,
}

// =============================================================================
// Error payload
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw_output: None,
        }
    }

    pub fn with_raw_output(mut self, raw_output: impl Into<String>) -> Self {
        self.raw_output = Some(raw_output.into());
        self
    }
}
