mod config;
mod dataset;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::dataset::DatasetIndex;
use crate::llm_client::LlmClient;
use crate::recommendation::recommender::Recommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Experience Recommender v{}", env!("CARGO_PKG_VERSION"));

    // The dataset must load completely before anything is served
    let index = DatasetIndex::load(&config.dataset_path)
        .with_context(|| format!("Failed to load dataset from '{}'", config.dataset_path))?;

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );

    let recommender = Recommender::new(Arc::new(index), Arc::new(llm));

    let state = AppState {
        recommender: Arc::new(recommender),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
