use std::sync::Arc;

use ai_client::{strip_code_blocks, Gemini, TextGenerator};
use tracing::{debug, info, warn};

use phishlens_common::{AnalyzeError, Config, Verdict};

use crate::features::extract_features;
use crate::prompt::build_prompt;

/// Scores a single URL by asking a text model for a verdict.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct PhishingAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl PhishingAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &Config) -> Self {
        let gemini = Gemini::new(&config.gemini_api_key, &config.gemini_model)
            .with_base_url(&config.gemini_base_url)
            .with_timeout(config.request_timeout);
        Self::new(Arc::new(gemini))
    }

    /// Run the full pipeline for one URL: features, prompt, one upstream call,
    /// clean, parse, validate. Nothing is retried.
    pub async fn analyze(&self, url: &str) -> Result<Verdict, AnalyzeError> {
        if url.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }

        let features = extract_features(url);
        debug!(url_length = features.url_length, ?features, "Extracted URL features");

        let prompt = build_prompt(url, &features)?;

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            let err = AnalyzeError::from(e);
            warn!(kind = err.kind(), error = %err, "Upstream generation failed");
            err
        })?;

        let verdict = parse_verdict(&text).inspect_err(|err| {
            warn!(kind = err.kind(), error = %err, "Model output rejected");
        })?;

        info!(
            is_phishing = verdict.is_phishing,
            confidence_score = %verdict.confidence_score,
            "URL analyzed"
        );
        Ok(verdict)
    }
}

/// Turn raw model text into a verdict.
///
/// Strips an outer markdown fence, decodes the JSON into the typed verdict
/// and rejects scores outside 0..=100. Values are never clamped or coerced.
pub fn parse_verdict(text: &str) -> Result<Verdict, AnalyzeError> {
    let cleaned = strip_code_blocks(text);

    let invalid = |reason: String| AnalyzeError::InvalidModelJson {
        raw_output: cleaned.to_string(),
        reason,
    };

    let verdict: Verdict = serde_json::from_str(cleaned).map_err(|e| invalid(e.to_string()))?;

    let in_range = verdict
        .confidence_score
        .as_f64()
        .is_some_and(|score| score.is_finite() && (0.0..=100.0).contains(&score));
    if !in_range {
        return Err(invalid(format!(
            "confidenceScore {} is outside 0-100",
            verdict.confidence_score
        )));
    }

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use ai_client::AiError;
    use async_trait::async_trait;
    use serde_json::Number;

    use super::*;

    struct Unreachable;

    #[async_trait]
    impl TextGenerator for Unreachable {
        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            panic!("upstream must not be called");
        }
    }

    #[test]
    fn blank_url_short_circuits() {
        let analyzer = PhishingAnalyzer::new(Arc::new(Unreachable));
        let err = tokio_test::block_on(analyzer.analyze(" \n ")).unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyInput));
    }

    #[test]
    fn parses_fenced_verdict() {
        let verdict = parse_verdict(
            "```json\n{\"isPhishing\": true, \"confidenceScore\": 87, \"explanation\": \"suspicious login page\"}\n```",
        )
        .unwrap();
        assert_eq!(
            verdict,
            Verdict {
                is_phishing: true,
                confidence_score: Number::from(87),
                explanation: "suspicious login page".to_string(),
            }
        );
    }

    #[test]
    fn parses_unfenced_verdict() {
        let verdict = parse_verdict(
            "  {\"isPhishing\": false, \"confidenceScore\": 4.5, \"explanation\": \"known brand domain\"}\n",
        )
        .unwrap();
        assert!(!verdict.is_phishing);
        assert_eq!(verdict.confidence_score.as_f64(), Some(4.5));
    }

    #[test]
    fn prose_is_invalid_json_with_raw_text() {
        let err = parse_verdict("  I cannot determine this.\n").unwrap_err();
        match err {
            AnalyzeError::InvalidModelJson { raw_output, .. } => {
                assert_eq!(raw_output, "I cannot determine this.");
            }
            other => panic!("expected InvalidModelJson, got {other:?}"),
        }
    }

    #[test]
    fn wrong_field_types_are_rejected() {
        for text in [
            r#"{"isPhishing": "yes", "confidenceScore": 80, "explanation": "x"}"#,
            r#"{"isPhishing": true, "confidenceScore": "high", "explanation": "x"}"#,
            r#"{"isPhishing": true, "confidenceScore": 80}"#,
        ] {
            assert!(
                matches!(parse_verdict(text), Err(AnalyzeError::InvalidModelJson { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let err = parse_verdict(r#"{"isPhishing": true, "confidenceScore": 120, "explanation": "x"}"#)
            .unwrap_err();
        match err {
            AnalyzeError::InvalidModelJson { reason, raw_output } => {
                assert!(reason.contains("outside 0-100"));
                assert!(raw_output.contains("120"));
            }
            other => panic!("expected InvalidModelJson, got {other:?}"),
        }

        assert!(parse_verdict(r#"{"isPhishing": false, "confidenceScore": -1, "explanation": "x"}"#).is_err());
    }

    #[test]
    fn boundary_scores_are_accepted() {
        for score in ["0", "100", "0.0", "100.0"] {
            let text = format!(r#"{{"isPhishing": false, "confidenceScore": {score}, "explanation": "x"}}"#);
            assert!(parse_verdict(&text).is_ok(), "{score}");
        }
    }
}
