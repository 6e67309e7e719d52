//! MindEase Web Server
//!
//! Run with: cargo run -p mindease-web

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mindease_config::Config;
use mindease_web::{router::build_router_shared, sse::spawn_sensor_ticker, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    // Initialize tracing; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting MindEase Web Server...");

    // Create app state
    let state = Arc::new(AppState::from_config(&config)?);
    info!(rules = state.responder.len(), "Chat responder ready");

    let _ticker = spawn_sensor_ticker(state.clone());

    // Build router
    let app = build_router_shared(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
