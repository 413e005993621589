mod client;
pub mod types;

pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AiError;
use crate::traits::TextGenerator;
use client::GeminiClient;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Upper bound on a single request, connect through body read.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> GeminiClient<'_> {
        GeminiClient::new(&self.api_key, &self.http, &self.base_url, self.timeout)
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        self.client().generate_content(&self.model, request).await
    }
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TextGenerator Implementation
// =============================================================================

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let response = self
            .generate_content(&GenerateContentRequest::prompt(prompt))
            .await?;

        match response.text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            Some(_) => Err(AiError::EmptyResponse(
                "first candidate part has empty text".to_string(),
            )),
            None => Err(AiError::EmptyResponse(
                "no text at candidates[0].content.parts[0]".to_string(),
            )),
        }
    }
}
