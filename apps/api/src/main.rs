mod applications;
mod assignments;
mod certification;
mod config;
mod errors;
mod matching;
mod models;
mod projects;
mod routes;
mod state;
mod store;
mod users;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{seed, PlatformData};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillXpress API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize in-memory store
    let data = if config.seed_demo_data {
        let data = seed::demo_data();
        info!(
            users = data.users.len(),
            projects = data.projects.len(),
            "Loaded demo data"
        );
        data
    } else {
        PlatformData::default()
    };

    let state = AppState::new(config.clone(), data);
    info!(
        "Match scorer initialized (backend: {}, jitter: {})",
        state.match_scorer.backend(),
        config.match_jitter
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
