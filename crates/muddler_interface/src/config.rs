//! Explicit generation backend configuration.
//!
//! The backend choice is a named variant and every field is supplied by the
//! caller, so a client is constructable and testable without any process
//! environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which generation backend to talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationBackend {
    /// The Anthropic Messages API.
    Anthropic,
    /// Any OpenAI-compatible chat-completions endpoint (OpenAI itself, Groq,
    /// a local inference server, ...). The base URL selects the deployment.
    OpenAiCompatible {
        /// Full URL of the chat-completions endpoint
        base_url: String,
    },
}

/// Configuration for constructing a generation client.
///
/// # Examples
///
/// ```
/// use muddler_interface::{GenerationBackend, GenerationConfig};
/// use std::time::Duration;
///
/// let config = GenerationConfig::new(
///     GenerationBackend::Anthropic,
///     "claude-3-5-haiku-20241022",
///     "sk-test",
/// )
/// .with_timeout(Duration::from_secs(45));
///
/// assert_eq!(config.model, "claude-3-5-haiku-20241022");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// The backend to invoke
    pub backend: GenerationBackend,
    /// Model identifier passed to the backend
    pub model: String,
    /// API key for the backend
    pub api_key: String,
    /// Upper bound on the outbound call; the sole suspension point of a
    /// generation request must not hang its caller
    pub timeout: Duration,
}

impl GenerationConfig {
    /// Create a configuration with the default 30 second timeout.
    pub fn new(
        backend: GenerationBackend,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            model: model.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Builder method to override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = GenerationConfig::new(GenerationBackend::Anthropic, "m", "k");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn backend_variant_carries_endpoint() {
        let config = GenerationConfig::new(
            GenerationBackend::OpenAiCompatible {
                base_url: "http://localhost:8080/v1/chat/completions".to_string(),
            },
            "llama3",
            "unused",
        );
        match config.backend {
            GenerationBackend::OpenAiCompatible { base_url } => {
                assert!(base_url.starts_with("http://localhost"));
            }
            _ => panic!("expected OpenAiCompatible"),
        }
    }
}
