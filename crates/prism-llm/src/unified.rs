//! Unified LLM client that routes to the appropriate provider based on model name.

use prism_core::PaletteError;

use crate::anthropic::AnthropicClient;
use crate::client::LlmClient;
use crate::LlmResponse;

/// Provider-specific client selected from the model name.
enum Provider {
    OpenAI(LlmClient),
    Anthropic(AnthropicClient),
}

/// Unified client that routes requests to OpenAI or Anthropic based on model name.
pub struct UnifiedLlmClient {
    model: String,
    provider: Provider,
}

impl UnifiedLlmClient {
    /// Creates a new unified client, detecting provider from model name.
    ///
    /// `max_tokens` only applies to Anthropic, which requires a budget.
    pub fn new(model: &str, api_base: Option<&str>, max_tokens: u32) -> Self {
        let provider = match is_anthropic_model(model) {
            true => Provider::Anthropic(AnthropicClient::new(model, max_tokens)),
            false => Provider::OpenAI(LlmClient::new(model, api_base)),
        };

        Self {
            model: model.to_string(),
            provider,
        }
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns true if this client is configured for Anthropic.
    pub fn is_anthropic(&self) -> bool {
        matches!(self.provider, Provider::Anthropic(_))
    }

    /// Sends a request whose reply should be a JSON object.
    ///
    /// OpenAI-compatible endpoints run in JSON mode; Anthropic relies on the prompt.
    pub async fn chat_json(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, PaletteError> {
        match &self.provider {
            Provider::OpenAI(client) => client.chat_json(system_prompt, user_input).await,
            Provider::Anthropic(client) => client.chat(system_prompt, user_input).await,
        }
    }
}

fn is_anthropic_model(model: &str) -> bool {
    model.starts_with("claude-")
}
