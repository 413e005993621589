use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use phishlens_analyzer::PhishingAnalyzer;
use phishlens_api::{build_router, AppState};
use phishlens_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        model = %config.gemini_model,
        timeout_secs = config.request_timeout.as_secs(),
        "Loaded config"
    );

    let state = Arc::new(AppState {
        analyzer: PhishingAnalyzer::from_config(&config),
    });
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("PhishLens starting on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
