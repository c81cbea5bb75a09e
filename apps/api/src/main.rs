mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod extract;
mod gateway;
mod llm_client;
mod roadmap;
mod routes;
mod saves;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::gateway::ProxyGateway;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::roadmap::RoadmapGenerator;
use crate::routes::build_router;
use crate::saves::{InMemorySaveStore, PgSaveStore, SaveStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Persistence: PostgreSQL when configured, process memory otherwise
    let saves: Arc<dyn SaveStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            info!("Save store: PostgreSQL");
            Arc::new(PgSaveStore::new(pool))
        }
        None => {
            info!("Save store: in-memory (DATABASE_URL not set)");
            Arc::new(InMemorySaveStore::new())
        }
    };

    // Upstream catalog gateway
    let gateway = ProxyGateway::new(&config.catalog)?;
    info!("Catalog gateway initialized (base: {})", gateway.base_url());

    // Generative backend, optional
    let backend: Option<Arc<dyn TextGenerator>> = match &config.generator.api_key {
        Some(key) => {
            let client = GeminiClient::new(&config.generator, key.clone())?;
            info!(
                "Roadmap generator initialized (model: {})",
                config.generator.model
            );
            Some(Arc::new(client))
        }
        None => {
            info!("GEMINI_API_KEY not set, roadmaps will use the built-in template");
            None
        }
    };

    let state = AppState::new(Arc::new(gateway), RoadmapGenerator::new(backend), saves);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
