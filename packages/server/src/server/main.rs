// Main entry point for API server

use anyhow::{Context, Result};
use ideas_core::{
    kernel::{connect_store, ServerDeps},
    server::build_app,
    Config,
};
use site_metadata::{HttpFetcher, MetadataExtractor};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ideas_core=debug,site_metadata=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting 10,000 Ideas API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = ?config.store_backend, "Configuration loaded");

    let store = connect_store(&config).await?;

    let mut fetcher = HttpFetcher::new().with_user_agent(config.scraper_user_agent.clone());
    if let Some(timeout) = config.scrape_timeout {
        fetcher = fetcher.with_timeout(timeout);
    }
    let extractor = MetadataExtractor::new(Arc::new(fetcher));

    // Build application
    let app = build_app(ServerDeps::new(store, extractor), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
