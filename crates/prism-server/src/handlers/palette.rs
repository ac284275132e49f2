//! Palette HTTP handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{AppJson, PaletteRequest, PaletteResponse, RegenerateColorRequest, RegenerateColorResponse};
use crate::error::AppError;
use crate::services;
use crate::ServerState;

/// Generates a palette for the prompt, falling back to random colors when the AI fails.
pub async fn generate(
    State(state): State<Arc<ServerState>>,
    AppJson(req): AppJson<PaletteRequest>,
) -> Result<Json<PaletteResponse>, AppError> {
    let prompt = req.prompt()?;
    let response = services::palette::generate_palette(state.generator.as_ref(), prompt).await;
    Ok(Json(response))
}

/// Replaces one color of an existing palette.
pub async fn regenerate_color(
    State(state): State<Arc<ServerState>>,
    AppJson(req): AppJson<RegenerateColorRequest>,
) -> Result<Json<RegenerateColorResponse>, AppError> {
    let (prompt, colors, index) = req.validate()?;
    let response =
        services::palette::regenerate_color(state.generator.as_ref(), prompt, colors, index).await?;
    Ok(Json(response))
}
