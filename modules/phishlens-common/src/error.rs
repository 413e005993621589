use ai_client::AiError;
use thiserror::Error;

use crate::types::ErrorResult;

/// Every way a single URL analysis can fail. Each one ends the request.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("API Error: {status} - {body}")]
    UpstreamHttp { status: u16, body: String },

    #[error("Network Error: {0}")]
    Network(String),

    #[error("AI analysis failed: Unexpected response structure. {0}")]
    MalformedUpstreamResponse(String),

    #[error("AI analysis failed: Model returned invalid JSON.")]
    InvalidModelJson { raw_output: String, reason: String },

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl AnalyzeError {
    /// HTTP status the front end answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyzeError::EmptyInput => 400,
            _ => 500,
        }
    }

    pub fn to_error_result(&self) -> ErrorResult {
        let result = ErrorResult::new(self.to_string());
        match self {
            AnalyzeError::InvalidModelJson { raw_output, .. } => {
                result.with_raw_output(raw_output.clone())
            }
            _ => result,
        }
    }

    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::EmptyInput => "empty_input",
            AnalyzeError::UpstreamHttp { .. } => "upstream_http",
            AnalyzeError::Network(_) => "network",
            AnalyzeError::MalformedUpstreamResponse(_) => "malformed_upstream_response",
            AnalyzeError::InvalidModelJson { .. } => "invalid_model_json",
            AnalyzeError::Unknown(_) => "unknown",
        }
    }
}

impl From<AiError> for AnalyzeError {
    fn from(e: AiError) -> Self {
        match e {
            AiError::Api { status, body } => AnalyzeError::UpstreamHttp { status, body },
            AiError::Network(msg) => AnalyzeError::Network(msg),
            AiError::Timeout(_) => AnalyzeError::Network(e.to_string()),
            AiError::Parse(msg) | AiError::EmptyResponse(msg) => {
                AnalyzeError::MalformedUpstreamResponse(msg)
            }
            AiError::Config(_) => AnalyzeError::Unknown(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for AnalyzeError {
    fn from(e: anyhow::Error) -> Self {
        AnalyzeError::Unknown(format!("{e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn empty_input_is_client_error() {
        let err = AnalyzeError::EmptyInput;
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_error_result(), ErrorResult::new("Please enter a URL"));
    }

    #[test]
    fn upstream_http_message_carries_status_and_body() {
        let err = AnalyzeError::from(AiError::Api {
            status: 403,
            body: "API key not valid".to_string(),
        });
        assert!(matches!(err, AnalyzeError::UpstreamHttp { status: 403, .. }));
        assert_eq!(err.to_string(), "API Error: 403 - API key not valid");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn timeout_maps_to_network() {
        let err = AnalyzeError::from(AiError::Timeout(Duration::from_secs(10)));
        assert!(matches!(err, AnalyzeError::Network(_)));
        assert_eq!(
            err.to_string(),
            "Network Error: Request timed out after 10s"
        );
    }

    #[test]
    fn network_message_is_prefixed_once() {
        let err = AnalyzeError::from(AiError::Network("connection refused".to_string()));
        assert_eq!(err.to_string(), "Network Error: connection refused");
    }

    #[test]
    fn parse_and_empty_map_to_malformed() {
        let parse = AnalyzeError::from(AiError::Parse("expected value".to_string()));
        let empty = AnalyzeError::from(AiError::EmptyResponse("no text".to_string()));
        assert!(matches!(parse, AnalyzeError::MalformedUpstreamResponse(_)));
        assert!(matches!(empty, AnalyzeError::MalformedUpstreamResponse(ref m) if m == "no text"));
    }

    #[test]
    fn config_maps_to_unknown_and_keeps_message() {
        let err = AnalyzeError::from(AiError::Config("bad header".to_string()));
        assert_eq!(
            err.to_string(),
            "An unknown error occurred: Configuration error: bad header"
        );
    }

    #[test]
    fn invalid_model_json_exposes_raw_output() {
        let err = AnalyzeError::InvalidModelJson {
            raw_output: "I cannot determine this.".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let result = err.to_error_result();
        assert_eq!(result.error, "AI analysis failed: Model returned invalid JSON.");
        assert_eq!(result.raw_output.as_deref(), Some("I cannot determine this."));
    }

    #[test]
    fn only_invalid_model_json_has_raw_output() {
        let errors = [
            AnalyzeError::EmptyInput,
            AnalyzeError::Network("reset".to_string()),
            AnalyzeError::MalformedUpstreamResponse("x".to_string()),
            AnalyzeError::Unknown("y".to_string()),
        ];
        for err in errors {
            assert!(err.to_error_result().raw_output.is_none(), "{}", err.kind());
        }
    }
}
