mod chat;
mod config;
mod dataset;
mod errors;
mod oracle;
mod routes;
mod sections;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::tables::DomainTables;
use crate::config::Config;
use crate::dataset::load_dataset;
use crate::oracle::AnthropicOracle;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Joblens API v{}", env!("CARGO_PKG_VERSION"));

    // Build the job dataset once; it is read-only for the process lifetime
    let dataset = load_dataset(&config.job_descriptions_path, &config.salaries_path)?;
    info!("Job dataset loaded: {} records", dataset.len());

    // Initialize the oracle client
    let oracle = AnthropicOracle::new(config.anthropic_api_key.clone());
    info!("Oracle client initialized (model: {})", oracle::client::MODEL);

    // Build app state
    let state = AppState {
        dataset: Arc::new(dataset),
        oracle: Arc::new(oracle),
        tables: Arc::new(DomainTables::default()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
