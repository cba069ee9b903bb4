//! Generic client for OpenAI-compatible chat-completions endpoints.
//!
//! Many inference services expose the same chat-completions wire shape
//! behind different base URLs. Pointing this client at a different endpoint
//! swaps the deployment without changing any downstream component.

use async_trait::async_trait;
use muddler_error::{GenerationUnavailable, MuddlerResult};
use muddler_interface::GenerationDriver;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for any OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiCompatibleClient {
    /// Creates a new client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token for the endpoint
    /// * `model` - Model identifier the endpoint understands
    /// * `base_url` - Full URL of the chat-completions route
    /// * `timeout` - Upper bound on each outbound request
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> MuddlerResult<Self> {
        let model = model.into();
        let base_url = base_url.into();
        debug!(model = %model, url = %base_url, "Creating OpenAI-compatible client");
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            muddler_error::ConfigError::new(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url,
        })
    }
}

#[async_trait]
impl GenerationDriver for OpenAiCompatibleClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_length = prompt.len()))]
    async fn generate(&self, prompt: &str) -> MuddlerResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, url = %self.base_url, "Failed to send chat-completions request");
                GenerationUnavailable::new(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat-completions endpoint returned error");
            return Err(GenerationUnavailable::new(format!(
                "API error {}: {}",
                status.as_u16(),
                body
            ))
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat-completions response");
            GenerationUnavailable::new(format!("Failed to parse response: {}", e))
        })?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationUnavailable::new("Response contained no choices with content")
            })?;

        debug!(response_length = text.len(), "Received chat-completions response");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_empty_choices_is_rejected() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn choice_content_deserializes() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"a drink"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("a drink")
        );
    }
}
