use phishlens_common::FeatureRecord;

/// Substrings that commonly show up in credential-harvesting URLs.
pub const SUSPICIOUS_KEYWORDS: [&str; 6] = ["login", "verify", "account", "bank", "update", "secure"];

/// Derive the lexical feature record for a URL. Total and side-effect free.
///
/// The string is taken as-is: no trimming, no parsing, no scheme
/// normalization. `uses_https` is a case-sensitive prefix check.
pub fn extract_features(url: &str) -> FeatureRecord {
    let lower = url.to_lowercase();
    FeatureRecord {
        url_length: url.chars().count(),
        has_at_symbol: url.contains('@'),
        uses_https: url.starts_with("https"),
        dot_count: url.matches('.').count(),
        contains_suspicious_words: SUSPICIOUS_KEYWORDS.iter().any(|w| lower.contains(w)),
    }
}
