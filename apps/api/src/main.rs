mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod posts;
mod remix;
mod routes;
mod state;
mod ui;
mod workspace;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::posts::{MemoryPostStore, PgPostStore, PostStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API credential)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Remixer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        key_length = config.anthropic_api_key.len(),
        "Anthropic credential loaded"
    );

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.anthropic_api_url.clone(),
    );
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the post store
    let posts: Arc<dyn PostStore> = match &config.database_url {
        Some(url) => Arc::new(PgPostStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; saved posts are kept in memory only");
            Arc::new(MemoryPostStore::new())
        }
    };

    let state = AppState { llm, posts };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Server running at http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
