//! Data transfer objects for HTTP message serialization.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use prism_core::is_hex_color;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::services::palette::out_of_range;

/// JSON object body extractor whose rejections become `400 {"error": ...}`.
///
/// The `Content-Type` header is not consulted.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        decode_object(&bytes).map(AppJson)
    }
}

/// Decodes a body that must be a JSON object.
fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("request body must be a JSON object: {}", e)))?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {}", e)))
}

// === Palette Generation ===

/// Request body for palette generation.
///
/// Fields are optional so that a missing prompt reaches validation
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct PaletteRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl PaletteRequest {
    /// Returns the prompt, or the validation error for a missing/empty one.
    pub fn prompt(&self) -> Result<&str, AppError> {
        validate_prompt(self.prompt.as_deref())
    }
}

/// Palette returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteResponse {
    pub colors: Vec<String>,
    pub advice: String,
    /// Unix seconds at assembly time.
    pub timestamp: i64,
    pub description: String,
}

// === Single Color Regeneration ===

/// Request to replace one color of an existing palette.
#[derive(Debug, Deserialize)]
pub struct RegenerateColorRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub index: Option<usize>,
}

impl RegenerateColorRequest {
    /// Validates the request, returning `(prompt, colors, index)`.
    pub fn validate(&self) -> Result<(&str, &[String], usize), AppError> {
        let prompt = validate_prompt(self.prompt.as_deref())?;

        let colors = match self.colors.as_deref() {
            None => return Err(AppError::BadRequest("colors is required".into())),
            Some([]) => return Err(AppError::BadRequest("colors must not be empty".into())),
            Some(colors) => colors,
        };
        if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
            return Err(AppError::BadRequest(format!("'{}' is not a hex color", bad)));
        }

        let index = self
            .index
            .ok_or_else(|| AppError::BadRequest("index is required".into()))?;
        if index >= colors.len() {
            return Err(out_of_range(index, colors.len()));
        }

        Ok((prompt, colors, index))
    }
}

/// Palette after one color was replaced.
#[derive(Debug, Clone, Serialize)]
pub struct RegenerateColorResponse {
    pub colors: Vec<String>,
    pub index: usize,
    pub color: String,
    pub timestamp: i64,
}

// === Health ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn validate_prompt(prompt: Option<&str>) -> Result<&str, AppError> {
    match prompt {
        None => Err(AppError::BadRequest("prompt is required".into())),
        Some("") => Err(AppError::BadRequest("prompt must not be empty".into())),
        Some(prompt) => Ok(prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regenerate(prompt: Option<&str>, colors: Option<&[&str]>, index: Option<usize>) -> RegenerateColorRequest {
        RegenerateColorRequest {
            prompt: prompt.map(String::from),
            colors: colors.map(|c| c.iter().map(|s| s.to_string()).collect()),
            index,
        }
    }

    fn bad_request_message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn missing_prompt_is_required() {
        let req = PaletteRequest { prompt: None };
        assert_eq!(bad_request_message(req.prompt().unwrap_err()), "prompt is required");
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let req = PaletteRequest { prompt: Some(String::new()) };
        assert_eq!(bad_request_message(req.prompt().unwrap_err()), "prompt must not be empty");
    }

    #[test]
    fn prompt_is_returned_verbatim() {
        let req = PaletteRequest { prompt: Some("  misty forest ".into()) };
        assert_eq!(req.prompt().unwrap(), "  misty forest ");
    }

    #[test]
    fn regenerate_accepts_valid_request() {
        let req = regenerate(Some("sunset"), Some(&["#FF5733", "#1A2B3C"]), Some(1));
        let (prompt, colors, index) = req.validate().unwrap();
        assert_eq!(prompt, "sunset");
        assert_eq!(colors.len(), 2);
        assert_eq!(index, 1);
    }

    #[test]
    fn regenerate_requires_colors() {
        let req = regenerate(Some("sunset"), None, Some(0));
        assert_eq!(bad_request_message(req.validate().unwrap_err()), "colors is required");

        let req = regenerate(Some("sunset"), Some(&[]), Some(0));
        assert_eq!(bad_request_message(req.validate().unwrap_err()), "colors must not be empty");
    }

    #[test]
    fn regenerate_requires_index_in_range() {
        let req = regenerate(Some("sunset"), Some(&["#FF5733"]), None);
        assert_eq!(bad_request_message(req.validate().unwrap_err()), "index is required");

        let req = regenerate(Some("sunset"), Some(&["#FF5733"]), Some(1));
        assert!(bad_request_message(req.validate().unwrap_err()).contains("out of range"));
    }

    #[test]
    fn regenerate_rejects_non_hex_colors() {
        let req = regenerate(Some("sunset"), Some(&["#FF5733", "red"]), Some(0));
        assert_eq!(bad_request_message(req.validate().unwrap_err()), "'red' is not a hex color");

        let req = regenerate(Some("sunset"), Some(&["#FF573"]), Some(0));
        assert!(req.validate().is_err());
    }

    #[test]
    fn body_must_be_an_object() {
        let err = decode_object::<PaletteRequest>(br#"["abc"]"#).unwrap_err();
        assert!(bad_request_message(err).contains("JSON object"));

        let err = decode_object::<PaletteRequest>(b"\"abc\"").unwrap_err();
        assert!(bad_request_message(err).contains("JSON object"));
    }

    #[test]
    fn object_body_decodes() {
        let req: PaletteRequest = decode_object(br#"{"prompt": "abc", "extra": 1}"#).unwrap();
        assert_eq!(req.prompt.as_deref(), Some("abc"));

        let req: PaletteRequest = decode_object(br#"{"prompt": null}"#).unwrap();
        assert!(req.prompt.is_none());
    }

    #[test]
    fn field_type_mismatch_is_rejected() {
        let err = decode_object::<PaletteRequest>(br#"{"prompt": 42}"#).unwrap_err();
        assert!(bad_request_message(err).starts_with("invalid request body"));
    }

    #[test]
    fn regenerate_checks_prompt_first() {
        let req = regenerate(None, None, None);
        assert_eq!(bad_request_message(req.validate().unwrap_err()), "prompt is required");
    }
}
