//! LLM client abstractions and the AI palette generator.
//!
//! - [`UnifiedLlmClient`] — Routes to OpenAI-compatible or Anthropic APIs
//! - [`LlmClient`] — OpenAI-compatible client (also works with Ollama)
//! - [`AnthropicClient`] — Claude models via the Anthropic API
//! - [`LlmPaletteGenerator`] — [`prism_core::PaletteGenerator`] backed by an LLM
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use prism_core::PaletteGenerator;
//! use prism_llm::{LlmPaletteGenerator, UnifiedLlmClient};
//!
//! let client = UnifiedLlmClient::new("gpt-4o-mini", None, 1024);
//! let generator = LlmPaletteGenerator::new(client, Duration::from_secs(8));
//! let palette = generator.generate_palette("sunset over ocean").await?;
//! ```

mod anthropic;
mod client;
mod generator;
mod prompts;
mod unified;

pub use anthropic::AnthropicClient;
pub use client::{LlmClient, LlmMetrics, LlmResponse};
pub use generator::{parse_color, parse_palette, LlmPaletteGenerator};
pub use unified::UnifiedLlmClient;
