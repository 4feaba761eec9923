use std::sync::Arc;

use anyhow::Context;
use summarizer::api::{self, AppState};
use summarizer::core::config::{EnvCredentials, ServerConfig};
use tokio::net::TcpListener;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarizer::setup_logging();

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    // Credentials are read per request, so the server starts without them.
    let state = Arc::new(AppState::new(Arc::new(EnvCredentials), &config));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    api::serve(listener, state).await?;
    Ok(())
}
