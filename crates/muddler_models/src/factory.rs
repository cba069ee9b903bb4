//! Driver construction from configuration.

use crate::{AnthropicClient, OpenAiCompatibleClient};
use muddler_error::MuddlerResult;
use muddler_interface::{GenerationBackend, GenerationConfig, GenerationDriver};
use tracing::info;

/// Build the driver a configuration names.
///
/// Downstream components hold a `Box<dyn GenerationDriver>`, so swapping the
/// backend endpoint or model is a configuration change only.
///
/// # Errors
///
/// Returns an error if the backend's HTTP client cannot be constructed.
pub fn build_driver(config: &GenerationConfig) -> MuddlerResult<Box<dyn GenerationDriver>> {
    match &config.backend {
        GenerationBackend::Anthropic => {
            info!(model = %config.model, "Building Anthropic driver");
            let client = AnthropicClient::new(&config.api_key, &config.model, config.timeout)?;
            Ok(Box::new(client))
        }
        GenerationBackend::OpenAiCompatible { base_url } => {
            info!(model = %config.model, url = %base_url, "Building OpenAI-compatible driver");
            let client = OpenAiCompatibleClient::new(
                &config.api_key,
                &config.model,
                base_url,
                config.timeout,
            )?;
            Ok(Box::new(client))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anthropic_config_builds_anthropic_driver() {
        let config = GenerationConfig::new(GenerationBackend::Anthropic, "claude-3-5-haiku", "k");
        let driver = build_driver(&config).unwrap();
        assert_eq!(driver.provider_name(), "anthropic");
        assert_eq!(driver.model_name(), "claude-3-5-haiku");
    }

    #[test]
    fn openai_compatible_config_builds_generic_driver() {
        let config = GenerationConfig::new(
            GenerationBackend::OpenAiCompatible {
                base_url: "http://localhost:11434/v1/chat/completions".to_string(),
            },
            "llama3",
            "unused",
        );
        let driver = build_driver(&config).unwrap();
        assert_eq!(driver.provider_name(), "openai-compatible");
    }
}
