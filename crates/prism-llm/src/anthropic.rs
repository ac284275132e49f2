//! Anthropic Claude API client.

use std::time::Instant;

use prism_core::PaletteError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::client::llm_err;
use crate::{LlmMetrics, LlmResponse};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

/// Client for Anthropic's Claude API.
pub struct AnthropicClient {
    client: Client,
    model: String,
    api_key: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Creates a new Anthropic client, reading `ANTHROPIC_API_KEY`.
    pub fn new(model: &str, max_tokens: u32) -> Self {
        let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        info!(
            "AnthropicClient: model={}, api_key_len={}",
            model,
            api_key.len()
        );
        Self {
            client: Client::new(),
            model: model.to_string(),
            api_key,
            max_tokens,
        }
    }

    /// Sends a non-streaming chat request and returns the complete response.
    pub async fn chat(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, PaletteError> {
        let start = Instant::now();

        let request = AnthropicRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: system_prompt,
            messages: vec![AnthropicMessage {
                role: "user",
                content: user_input,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(llm_err)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PaletteError::LlmError(format!(
                "Anthropic API error {}: {}",
                status, body
            )));
        }

        let resp: MessagesResponse = response.json().await.map_err(llm_err)?;
        let content = resp.content.into_iter().map(|c| c.text).collect::<Vec<_>>().join("");

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let input_tokens = resp.usage.input_tokens.unwrap_or(0);
        let output_tokens = resp.usage.output_tokens.unwrap_or(0);
        debug!(
            "Anthropic: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics { input_tokens, output_tokens, elapsed_ms },
        })
    }
}
