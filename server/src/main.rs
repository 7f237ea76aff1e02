#![recursion_limit = "256"]

mod config;
mod creations;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};
use crate::creations::{CreationStore, CreationStoreError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] CreationStoreError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "origami server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let store = CreationStore::load(&config.creations_path)?;
    if store.is_empty() {
        tracing::warn!(path = %config.creations_path.display(), "gallery will be empty");
    }
    let state = state::AppState::new(store);

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = %config.port, "origami listening");
    axum::serve(listener, app).await?;
    Ok(())
}
