//! HTTP surface of the prism palette service.
//!
//! Exposes the router and shared state so the binary and the integration
//! tests build the exact same application.

pub mod dto;
pub mod error;
pub mod handlers;
mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use prism_core::PaletteGenerator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub generator: Arc<dyn PaletteGenerator>,
}

impl ServerState {
    pub fn new(generator: Arc<dyn PaletteGenerator>) -> Self {
        Self { generator }
    }
}

/// Builds the application router.
///
/// All routes live under `/api`; anything else answers with a JSON 404.
pub fn build_app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/generate-palette", post(handlers::palette::generate))
        .route("/regenerate-color", post(handlers::palette::regenerate_color))
        .layer(trace_layer);

    let api = Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
