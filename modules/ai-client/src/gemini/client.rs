use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

use super::types::*;
use crate::error::AiError;
use crate::util::truncate_to_char_boundary;

const MAX_ERROR_PREVIEW_BYTES: usize = 512;
const API_KEY_HEADER: &str = "x-goog-api-key";

pub(crate) struct GeminiClient<'a> {
    api_key: &'a str,
    http: &'a reqwest::Client,
    base_url: &'a str,
    timeout: Duration,
}

impl<'a> GeminiClient<'a> {
    pub fn new(
        api_key: &'a str,
        http: &'a reqwest::Client,
        base_url: &'a str,
        timeout: Duration,
    ) -> Self {
        Self {
            api_key,
            http,
            base_url,
            timeout,
        }
    }

    fn headers(&self) -> Result<HeaderMap, AiError> {
        let mut api_key = HeaderValue::from_str(self.api_key)
            .map_err(|_| AiError::Config("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Transport failures never carry the request URL.
    fn classify(&self, e: reqwest::Error) -> AiError {
        if e.is_timeout() {
            AiError::Timeout(self.timeout)
        } else {
            AiError::Network(e.without_url().to_string())
        }
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        );

        debug!(model, "Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                body = truncate_to_char_boundary(&body, MAX_ERROR_PREVIEW_BYTES),
                "Gemini API error"
            );
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            AiError::Parse(format!(
                "{e}; body: {}",
                truncate_to_char_boundary(&body, MAX_ERROR_PREVIEW_BYTES)
            ))
        })
    }
}
