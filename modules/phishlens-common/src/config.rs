use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::warn;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    ///
    /// A missing `GEMINI_API_KEY` is not an error here; the upstream rejects
    /// the request instead.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset and empty values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = var("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.is_empty() {
            warn!("GEMINI_API_KEY is not set; upstream calls will be rejected");
        }

        let timeout_secs = match var("ANALYZE_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("ANALYZE_TIMEOUT_SECS must be a number, got {v:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("ANALYZE_TIMEOUT_SECS must be at least 1");
        }

        let web_port = match var("WEB_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("WEB_PORT must be a port number, got {v:?}"))?,
            None => 5000,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            web_host: var("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &if self.gemini_api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("web_host", &self.web_host)
            .field("web_port", &self.web_port)
            .finish()
    }
}
