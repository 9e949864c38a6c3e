mod config;
mod errors;
mod export;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::backend::{ClaudeBackend, TemplateBackend, TextBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting leadgen API v{}", env!("CARGO_PKG_VERSION"));

    // Select the text backend: Claude when a credential is present,
    // deterministic templates otherwise. The endpoint works either way.
    let timeout = Duration::from_secs(config.backend_timeout_secs);
    let backend: Arc<dyn TextBackend> = match config.anthropic_api_key.clone() {
        Some(api_key) => {
            info!(
                "Text backend: Claude (model: {}, timeout: {}s)",
                llm_client::MODEL,
                config.backend_timeout_secs
            );
            Arc::new(ClaudeBackend::new(LlmClient::new(api_key, timeout)))
        }
        None => {
            info!("Text backend: deterministic templates (no ANTHROPIC_API_KEY set)");
            Arc::new(TemplateBackend)
        }
    };

    // Build app state
    let state = AppState { backend };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser form is served from a separate origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
