use async_trait::async_trait;

use crate::error::AiError;

// =============================================================================
// TextGenerator Trait
// =============================================================================

/// Single-turn text generation: one prompt in, the model's text out.
///
/// Implementations perform exactly one upstream call per invocation and
/// never retry. An empty or missing completion is an error, not `Ok("")`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
