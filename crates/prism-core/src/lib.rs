//! Core domain types and error definitions for prism.
//!
//! This crate provides the fundamental types shared across the prism service:
//!
//! - [`PaletteError`] — Error type for palette generation
//! - [`PaletteResult`] — Colors plus advice, from the AI or the fallback
//! - [`PaletteGenerator`] — The AI collaborator seam
//! - [`fallback`] — Seeded pseudo-random palettes used when the AI fails
//!
//! # Example
//!
//! ```rust
//! use prism_core::{fallback, PaletteResult};
//!
//! let result: PaletteResult = fallback::fallback_palette("abc");
//! assert_eq!(result.colors.len(), fallback::FALLBACK_COLOR_COUNT);
//! assert!(result.colors.iter().all(|c| prism_core::is_hex_color(c)));
//! ```

pub mod fallback;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while obtaining a palette from the AI collaborator.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// LLM API request failed.
    #[error("LLM request failed: {0}")]
    LlmError(String),

    /// The LLM reply could not be parsed.
    #[error("Failed to parse palette: {0}")]
    ParseError(String),

    /// The reply parsed but broke the palette contract.
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// The collaborator did not answer in time (milliseconds).
    #[error("Palette generation timed out after {0}ms")]
    Timeout(u64),
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        PaletteError::ParseError(err.to_string())
    }
}

/// A palette: ordered hex colors plus free-form advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResult {
    /// Colors in `#RRGGBB` form, in display order.
    pub colors: Vec<String>,
    /// Usage advice accompanying the colors.
    #[serde(default)]
    pub advice: String,
}

impl PaletteResult {
    /// Checks the collaborator contract: at least one color, all hex.
    ///
    /// Colors are returned unchanged; only their shape is checked.
    pub fn validate(self) -> Result<Self, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::InvalidPalette("no colors returned".into()));
        }
        if let Some(bad) = self.colors.iter().find(|c| !is_hex_color(c)) {
            return Err(PaletteError::InvalidPalette(format!("'{}' is not a hex color", bad)));
        }
        Ok(self)
    }
}

/// Returns `true` for `#RRGGBB` strings (either case).
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// The AI palette collaborator.
///
/// Implementations own their protocol, authentication and timeout. Any
/// failure is reported as an `Err`; callers decide how to degrade.
#[async_trait]
pub trait PaletteGenerator: Send + Sync {
    /// Produces a palette for the prompt.
    async fn generate_palette(&self, prompt: &str) -> Result<PaletteResult, PaletteError>;

    /// Produces one replacement color for `colors[index]`.
    async fn regenerate_color(
        &self,
        prompt: &str,
        colors: &[String],
        index: usize,
    ) -> Result<String, PaletteError>;
}
