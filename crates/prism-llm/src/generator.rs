//! AI palette generator backed by an LLM.

use std::time::Duration;

use async_trait::async_trait;
use prism_core::{is_hex_color, PaletteError, PaletteGenerator, PaletteResult};
use serde::Deserialize;
use tracing::{debug, info};

use crate::prompts::{regenerate_color_message, PALETTE_PROMPT, REGENERATE_COLOR_PROMPT};
use crate::{LlmResponse, UnifiedLlmClient};

/// Generates palettes by prompting an LLM for JSON.
///
/// Every request is bounded by `timeout`; an expired request reports
/// [`PaletteError::Timeout`].
pub struct LlmPaletteGenerator {
    client: UnifiedLlmClient,
    timeout: Duration,
}

impl LlmPaletteGenerator {
    pub fn new(client: UnifiedLlmClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    async fn ask(&self, system_prompt: &str, user_input: &str) -> Result<LlmResponse, PaletteError> {
        let call = self.client.chat_json(system_prompt, user_input);
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| PaletteError::Timeout(self.timeout.as_millis() as u64))?
    }
}

#[async_trait]
impl PaletteGenerator for LlmPaletteGenerator {
    async fn generate_palette(&self, prompt: &str) -> Result<PaletteResult, PaletteError> {
        debug!("Requesting palette from {}", self.client.model());
        let response = self.ask(PALETTE_PROMPT, prompt).await?;
        let palette = parse_palette(&response.content)?;
        info!("LLM palette: {} colors, {}", palette.colors.len(), response.metrics);
        Ok(palette)
    }

    async fn regenerate_color(
        &self,
        prompt: &str,
        colors: &[String],
        index: usize,
    ) -> Result<String, PaletteError> {
        let message = regenerate_color_message(prompt, colors, index);
        let response = self.ask(REGENERATE_COLOR_PROMPT, &message).await?;
        let color = parse_color(&response.content)?;
        info!("LLM color {}: {}, {}", index, color, response.metrics);
        Ok(color)
    }
}

#[derive(Deserialize)]
struct ColorReply {
    color: String,
}

/// Parses an LLM reply into a validated palette.
///
/// Tolerates Markdown fences and prose around the JSON object.
pub fn parse_palette(content: &str) -> Result<PaletteResult, PaletteError> {
    let palette: PaletteResult = serde_json::from_str(extract_json_object(content)?)?;
    palette.validate()
}

/// Parses an LLM reply of the form `{"color": "#RRGGBB"}`.
pub fn parse_color(content: &str) -> Result<String, PaletteError> {
    let reply: ColorReply = serde_json::from_str(extract_json_object(content)?)?;
    match is_hex_color(&reply.color) {
        true => Ok(reply.color),
        false => Err(PaletteError::InvalidPalette(format!(
            "'{}' is not a hex color",
            reply.color
        ))),
    }
}

/// Returns the outermost `{...}` span of the reply.
fn extract_json_object(content: &str) -> Result<&str, PaletteError> {
    let start = content.find('{');
    let end = content.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&content[start..=end]),
        _ => Err(PaletteError::ParseError(format!(
            "no JSON object in reply: {}",
            content
        ))),
    }
}
