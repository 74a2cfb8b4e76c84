//! regsearch: batch regulatory certification search service
//!
//! This is the main entry point for the application.

use anyhow::Result;
use regsearch::{
    config::Settings,
    perplexity::PerplexityClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    info!("Starting regsearch v{}", regsearch::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Upstream model: {}, per-call timeout: {}s, max batch: {}",
        settings.upstream.model, settings.upstream.timeout_secs, settings.search.max_domains
    );

    // Initialize upstream client; refuses to start without a credential
    let client = PerplexityClient::new(&settings.upstream)?;
    info!("Perplexity client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let state = AppState::new(settings, Arc::new(client));
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("REGSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
