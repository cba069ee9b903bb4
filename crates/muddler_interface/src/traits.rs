//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use muddler_error::MuddlerResult;

/// Core trait that all generation backends implement.
///
/// A driver sends a prompt to its backend and returns the raw response text.
/// It never inspects or validates the text's structure; recovering a recipe
/// from the response is the extraction/parsing layer's job. Implementations
/// must bound the outbound call with their configured timeout and surface
/// failures as [`muddler_error::GenerationUnavailable`] rather than hanging
/// the caller.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate the backend's single raw text response for a prompt.
    async fn generate(&self, prompt: &str) -> MuddlerResult<String>;

    /// Provider name (e.g., "anthropic", "openai-compatible").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-haiku-20241022").
    fn model_name(&self) -> &str;
}
