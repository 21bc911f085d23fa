//! LLM client module
//!
//! Provides the completion client trait, the Anthropic implementation,
//! and model-priority fallback.

mod anthropic;
pub mod client;
mod error;
mod fallback;
mod types;

pub use anthropic::AnthropicClient;
pub use client::LlmClient;
pub use error::LlmError;
pub use fallback::{FallbackOutcome, complete_with_fallback};
pub use types::{
    CompletionRequest, CompletionResponse, ContentBlock, Message, Role, StopReason, TokenUsage, ToolDefinition,
};

use std::sync::Arc;

use tracing::debug;

use crate::config::LlmConfig;

/// Create the LLM client from configuration
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(base_url = %config.base_url, "create_client: called");
    Ok(Arc::new(AnthropicClient::from_config(config)?))
}
