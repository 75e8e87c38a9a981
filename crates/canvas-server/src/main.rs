//! HTTP server entry point.
//!
//! Loads `.env`, reads [`config::ServerConfig`] from the environment, builds the
//! model client once, and serves the canvas router.

mod config;
mod dto;
mod error;
mod handlers;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use canvas_engine::CanvasGenerator;
use canvas_llm::UnifiedLlmClient;
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Shared server state accessible from all handlers.
///
/// Built once at startup and never mutated.
pub struct ServerState {
    pub generator: CanvasGenerator,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    if config.model.api_key.is_none() {
        warn!("No API key configured for {}; relying on provider defaults", config.model.model);
    }

    let client = UnifiedLlmClient::new(&config.model);
    info!("Using model {} ({:?})", config.model.model, client.provider());

    let state = Arc::new(ServerState {
        generator: CanvasGenerator::new(Arc::new(client)),
    });
    let app = routes::build_router(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
