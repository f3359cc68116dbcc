// Mindful Companion backend entry point
// Mood and journal tracking, crisis resources, supportive chat and EEG feature scoring

mod actors;
mod chat;
mod config;
mod database;
mod eeg;
mod error;
mod fs_manager;
mod models;
mod resources;
mod routes;
mod telemetry;

#[cfg(test)]
mod tests;

use actors::llm::LlmActorHandle;
use anyhow::Context;
use chat::ChatService;
use config::AppConfig;
use fs_manager::PathManager;
use routes::AppState;
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_LOG_FILTER: &str = "mindful_core=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber("mindful-core", DEFAULT_LOG_FILTER, std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = AppConfig::from_env()?;

    // Initialize File System
    let paths = PathManager::new(&config);
    paths
        .init()
        .context("Failed to prepare data and static directories")?;

    // Initialize Database
    let pool = database::init_db(&config.db_path)
        .await
        .with_context(|| format!("Failed to initialize database at {:?}", config.db_path))?;

    // Chat provider actor, only when a key is configured
    let chat = match &config.provider {
        Some(provider) => {
            info!("Chat provider enabled (model: {})", provider.model);
            let handle = LlmActorHandle::new(provider.clone());
            ChatService::new(Some(Arc::new(handle)), provider.model.clone())
        }
        None => {
            info!("OPENAI_API_KEY not set, chat uses the scripted fallback");
            ChatService::offline()
        }
    };

    let state = Arc::new(AppState { pool, chat });
    let app = routes::app(state, paths.static_dir(), config.max_upload_bytes);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Mindful Companion running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
