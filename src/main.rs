// src/main.rs
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::connectors::openai::OpenAiClient;
use crate::core::copilot::CopilotService;
use crate::storage::inventory::InventoryStore;
use crate::storage::transactions::TransactionStore;

mod api;
mod config;
mod connectors;
mod core;
mod storage;
mod types;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Load Configuration
    let config = AppConfig::new()?;
    info!("Cash Flow Copilot API v{}", env!("CARGO_PKG_VERSION"));
    info!("Copilot configured: {}", config.copilot_available());

    // 2. Initialize Components
    let transactions = Arc::new(TransactionStore::seeded());
    let inventory = Arc::new(InventoryStore::seeded());
    let openai = OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    );
    let copilot = Arc::new(CopilotService::new(transactions.clone(), openai));

    let state = AppState {
        config: config.clone(),
        transactions,
        inventory,
        copilot,
    };

    // 3. Serve
    let app = api::router(state);
    let addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
