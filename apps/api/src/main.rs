mod config;
mod errors;
mod generation;
mod layout;
mod render;
mod routes;
mod state;

use anyhow::{bail, Result};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::font::LoadedFont;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Namecard API v{}", env!("CARGO_PKG_VERSION"));

    check_assets(&config)?;

    info!(
        "Card template: rect {:?}, font sizes {}..={}, tolerance {}px",
        config.text_rect, config.min_font_size, config.max_font_size, config.fit_tolerance
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
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

/// Verifies the deployment's file layout at boot. The fallback font is the
/// last line of defense for every request, so an unloadable fallback refuses
/// to start. Missing primary assets only warn, since they may be mounted
/// after boot; only the requests that need them fail.
fn check_assets(config: &Config) -> Result<()> {
    if let Err(e) = LoadedFont::from_file(Path::new(&config.fallback_font_path)) {
        bail!("broken deployment: {e}");
    }
    if !Path::new(&config.base_image_path).is_file() {
        warn!(
            "base image {} not found; /api/generate will fail until it is mounted",
            config.base_image_path
        );
    }
    if !Path::new(&config.font_path).is_file() {
        warn!(
            "font {} not found; requests will use the fallback font",
            config.font_path
        );
    }
    Ok(())
}
