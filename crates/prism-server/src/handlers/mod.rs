//! HTTP route handlers for the palette server.

pub mod palette;

use axum::Json;

use crate::dto::HealthResponse;
use crate::error::AppError;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("route not found".into())
}
