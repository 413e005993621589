use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),
}
