pub mod analyzer;
pub mod features;
pub mod prompt;

pub use analyzer::{parse_verdict, PhishingAnalyzer};
pub use features::{extract_features, SUSPICIOUS_KEYWORDS};
pub use prompt::build_prompt;
