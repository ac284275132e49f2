//! Palette service - AI generation with a random fallback.
//!
//! Collaborator failures never reach the caller: they are logged and
//! replaced with fallback colors, so a validated request always succeeds.

use chrono::Utc;
use prism_core::{fallback, PaletteGenerator};
use tracing::{error, info};

use crate::dto::{PaletteResponse, RegenerateColorResponse};
use crate::error::AppError;

/// Produces the response for a validated prompt.
pub async fn generate_palette(generator: &dyn PaletteGenerator, prompt: &str) -> PaletteResponse {
    info!("Using '{}' to create colors", prompt);

    let result = match generator.generate_palette(prompt).await {
        Ok(result) => result,
        Err(e) => {
            error!("AI generation failed: {}, falling back to random generation", e);
            fallback::fallback_palette(prompt)
        }
    };

    PaletteResponse {
        colors: result.colors,
        advice: result.advice,
        timestamp: Utc::now().timestamp(),
        description: describe(prompt),
    }
}

/// Replaces `colors[index]`, leaving every other position untouched.
pub async fn regenerate_color(
    generator: &dyn PaletteGenerator,
    prompt: &str,
    colors: &[String],
    index: usize,
) -> Result<RegenerateColorResponse, AppError> {
    if index >= colors.len() {
        return Err(out_of_range(index, colors.len()));
    }

    info!("Regenerating color {} of {} for '{}'", index, colors.len(), prompt);

    let color = match generator.regenerate_color(prompt, colors, index).await {
        Ok(color) => color,
        Err(e) => {
            error!("AI color regeneration failed: {}, falling back to a random color", e);
            fallback::random_color()
        }
    };

    let mut updated = colors.to_vec();
    let slot = updated
        .get_mut(index)
        .ok_or_else(|| out_of_range(index, colors.len()))?;
    *slot = color.clone();

    Ok(RegenerateColorResponse {
        colors: updated,
        index,
        color,
        timestamp: Utc::now().timestamp(),
    })
}

pub(crate) fn out_of_range(index: usize, len: usize) -> AppError {
    AppError::BadRequest(format!("index {} is out of range for {} colors", index, len))
}

fn describe(prompt: &str) -> String {
    format!("Color scheme generated from prompt '{}'", prompt)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use prism_core::{PaletteError, PaletteResult};

    use super::*;

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PaletteGenerator for CountingGenerator {
        async fn generate_palette(&self, _prompt: &str) -> Result<PaletteResult, PaletteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(PaletteError::LlmError("offline".into()))
        }

        async fn regenerate_color(
            &self,
            _prompt: &str,
            _colors: &[String],
            _index: usize,
        ) -> Result<String, PaletteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("#0A0B0C".to_string())
        }
    }

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn out_of_range_index_is_an_error_not_a_panic() {
        let generator = CountingGenerator::default();
        let colors = palette(&["#111111", "#222222"]);

        let err = regenerate_color(&generator, "sunset", &colors, 2).await.unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "index 2 is out of range for 2 colors"),
            other => panic!("expected bad request, got {:?}", other),
        }
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn in_range_index_replaces_one_slot() {
        let generator = CountingGenerator::default();
        let colors = palette(&["#111111", "#222222"]);

        let response = regenerate_color(&generator, "sunset", &colors, 0).await.unwrap();

        assert_eq!(response.colors, palette(&["#0A0B0C", "#222222"]));
        assert_eq!(response.color, "#0A0B0C");
    }

    #[tokio::test]
    async fn failed_generation_still_builds_a_palette() {
        let generator = CountingGenerator::default();

        let response = generate_palette(&generator, "abc").await;

        assert_eq!(response.colors.len(), fallback::FALLBACK_COLOR_COUNT);
        assert_eq!(response.advice, fallback::FALLBACK_ADVICE);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn description_embeds_prompt_verbatim() {
        assert_eq!(
            describe("it's \"late\" autumn"),
            "Color scheme generated from prompt 'it's \"late\" autumn'"
        );
    }
}
