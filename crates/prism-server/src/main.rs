//! HTTP server entry point.
//!
//! Loads configuration, wires the LLM palette generator into the router,
//! and serves it on the configured address.

use std::sync::Arc;

use anyhow::Result;
use prism_config::ServerConfig;
use prism_llm::{LlmPaletteGenerator, UnifiedLlmClient};
use prism_server::{build_app, ServerState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    let client = UnifiedLlmClient::new(
        &config.llm.model,
        config.llm.api_base.as_deref(),
        config.llm.max_tokens,
    );
    info!(
        "Palette model: {} (timeout {}s)",
        client.model(),
        config.llm.timeout.as_secs()
    );

    let generator = LlmPaletteGenerator::new(client, config.llm.timeout);
    let state = Arc::new(ServerState::new(Arc::new(generator)));
    let app = build_app(state);

    info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
