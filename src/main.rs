use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wellness_api::api::{create_router, AppState};
use wellness_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Train models and load content pools once, before accepting requests
    let state = AppState::from_config(&config).context("Failed to initialize application state")?;

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
