//! Generation backend clients for Muddler.
//!
//! This crate provides the concrete [`GenerationDriver`] implementations:
//!
//! - [`AnthropicClient`]: the Anthropic Messages API
//! - [`OpenAiCompatibleClient`]: any OpenAI-compatible chat-completions
//!   endpoint, selected by base URL
//!
//! Both speak plain HTTP via `reqwest` and honor the request timeout from
//! [`muddler_interface::GenerationConfig`]. Use [`build_driver`] to turn a
//! configuration into a boxed driver without caring which backend it names.
//!
//! # Example
//!
//! ```no_run
//! use muddler_interface::{GenerationBackend, GenerationConfig, GenerationDriver};
//! use muddler_models::build_driver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenerationConfig::new(
//!     GenerationBackend::Anthropic,
//!     "claude-3-5-haiku-20241022",
//!     std::env::var("ANTHROPIC_API_KEY")?,
//! );
//! let driver = build_driver(&config)?;
//! let text = driver.generate("Suggest a cocktail name.").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod factory;
mod openai_compat;

pub use anthropic::{AnthropicClient, AnthropicContentBlock, AnthropicRequest, AnthropicResponse};
pub use factory::build_driver;
pub use openai_compat::OpenAiCompatibleClient;
