//! Anthropic Messages API client.

use async_trait::async_trait;
use muddler_error::{GenerationUnavailable, MuddlerResult};
use muddler_interface::GenerationDriver;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// A single content block in an Anthropic message or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    /// Plain text content
    Text {
        /// The text payload
        text: String,
    },
}

#[derive(Debug, Clone, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: Vec<AnthropicContentBlock>,
}

/// Wire request for the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Build a single-turn user request for a prompt.
    pub fn from_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: vec![AnthropicContentBlock::Text {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// Wire response from the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicResponse {
    /// Response identifier
    pub id: String,
    /// Generated content blocks
    pub content: Vec<AnthropicContentBlock>,
}

impl AnthropicResponse {
    /// Concatenate all text blocks into the raw response text.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                AnthropicContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-3-5-haiku-20241022")
    /// * `timeout` - Upper bound on each outbound request
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> MuddlerResult<Self> {
        let api_key = api_key.into();
        let model = model.into();
        debug!(model = %model, "Creating new Anthropic client");
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            muddler_error::ConfigError::new(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn send(&self, request: &AnthropicRequest) -> MuddlerResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                GenerationUnavailable::new(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(GenerationUnavailable::new(format!(
                "API error {}: {}",
                status.as_u16(),
                body
            ))
            .into());
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            GenerationUnavailable::new(format!("Failed to parse response: {}", e))
        })?;

        debug!(response_id = %anthropic_response.id, "Received response from Anthropic");
        Ok(anthropic_response)
    }
}

#[async_trait]
impl GenerationDriver for AnthropicClient {
    #[instrument(skip(self, prompt), fields(prompt_length = prompt.len()))]
    async fn generate(&self, prompt: &str) -> MuddlerResult<String> {
        let request = AnthropicRequest::from_prompt(&self.model, prompt);
        let response = self.send(&request).await?;
        Ok(response.text())
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
