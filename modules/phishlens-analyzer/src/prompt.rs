use anyhow::{Context, Result};

use phishlens_common::FeatureRecord;

const ANALYST_ROLE: &str = "You are a cybersecurity AI. Analyze the following URL for phishing risks.";

const RESPONSE_INSTRUCTIONS: &str = r#"Evaluate if this URL is likely a phishing attempt.
Respond in pure JSON only, with exactly these fields and nothing else:
{
  "isPhishing": true or false,
  "confidenceScore": a number between 0 and 100,
  "explanation": "short reason"
}"#;

/// Render the single-turn prompt for one URL.
///
/// The URL is embedded verbatim and the features as pretty-printed JSON;
/// everything else is fixed text.
pub fn build_prompt(url: &str, features: &FeatureRecord) -> Result<String> {
    let features_json =
        serde_json::to_string_pretty(features).context("Failed to serialize URL features")?;

    Ok(format!(
        "{ANALYST_ROLE}\n\nURL: {url}\nExtracted Features: {features_json}\n\n{RESPONSE_INSTRUCTIONS}\n"
    ))
}
