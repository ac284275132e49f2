//! Server configuration loaded from the environment.
//!
//! This crate defines the settings the prism server starts with:
//!
//! - [`ServerConfig`] — Listen address plus LLM settings
//! - [`LlmSettings`] — Model, endpoint, timeout and token budget
//! - [`ConfigError`] — Raised for values that do not parse
//!
//! # Loading
//!
//! ```rust,ignore
//! use prism_config::ServerConfig;
//!
//! let config = ServerConfig::from_env()?;
//! ```
//!
//! # Explicit values
//!
//! ```rust
//! use prism_config::ServerConfig;
//!
//! let config = ServerConfig::from_lookup(|key| match key {
//!     "PRISM_MODEL" => Some("claude-haiku-4-5-20251001".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.llm.model, "claude-haiku-4-5-20251001");
//! assert_eq!(config.bind_addr, "0.0.0.0:8000");
//! ```

use std::str::FromStr;
use std::time::Duration;

pub const BIND_ADDR_VAR: &str = "PRISM_BIND_ADDR";
pub const MODEL_VAR: &str = "PRISM_MODEL";
pub const API_BASE_VAR: &str = "PRISM_API_BASE";
pub const TIMEOUT_VAR: &str = "PRISM_AI_TIMEOUT_SECS";
pub const MAX_TOKENS_VAR: &str = "PRISM_MAX_TOKENS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Stays under the 10 s client timeout of the web frontend.
const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid(key: impl Into<String>, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Settings for the AI palette collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmSettings {
    /// Model identifier (e.g., "gpt-4o-mini", "claude-haiku-4-5-20251001").
    pub model: String,
    /// Optional OpenAI-compatible base URL for self-hosted endpoints.
    pub api_base: Option<String>,
    /// Upper bound on a single palette request.
    pub timeout: Duration,
    /// Completion budget for providers that require one.
    pub max_tokens: u32,
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub llm: LlmSettings,
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs: u64 = parse_or(&get, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(TIMEOUT_VAR, "0", "timeout must be positive"));
        }

        Ok(Self {
            bind_addr: get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            llm: LlmSettings {
                model: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.into()),
                api_base: get(API_BASE_VAR),
                timeout: Duration::from_secs(timeout_secs),
                max_tokens: parse_or(&get, MAX_TOKENS_VAR, DEFAULT_MAX_TOKENS)?,
            },
        })
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, raw.clone(), e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.api_base, None);
        assert_eq!(config.llm.timeout, Duration::from_secs(8));
        assert_eq!(config.llm.max_tokens, 1024);
    }

    #[test]
    fn values_override_defaults() {
        let config = load(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (MODEL_VAR, "llama3.2"),
            (API_BASE_VAR, "http://localhost:11434/v1"),
            (TIMEOUT_VAR, "3"),
            (MAX_TOKENS_VAR, "256"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.api_base.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(config.llm.timeout, Duration::from_secs(3));
        assert_eq!(config.llm.max_tokens, 256);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[(API_BASE_VAR, ""), (TIMEOUT_VAR, "  ")]).unwrap();
        assert_eq!(config.llm.api_base, None);
        assert_eq!(config.llm.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn unparsable_number_names_the_key() {
        let err = load(&[(TIMEOUT_VAR, "soon")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(TIMEOUT_VAR));
        assert!(message.contains("'soon'"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(load(&[(TIMEOUT_VAR, "0")]).is_err());
    }
}
