// src/api/mod.rs
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::connectors::openai::CopilotError;
use crate::core::copilot::CopilotService;
use crate::storage::inventory::InventoryStore;
use crate::storage::transactions::TransactionStore;

pub mod cashflow;
pub mod copilot;
pub mod health;
pub mod inventory;
pub mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub transactions: Arc<TransactionStore>,
    pub inventory: Arc<InventoryStore>,
    pub copilot: Arc<CopilotService>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error(transparent)]
    Copilot(#[from] CopilotError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ApiError::Copilot(err) => (
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY),
                err.to_string(),
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/api/v1/settings", get(health::settings))
        .route("/api/v1/transactions", get(transactions::list))
        .route(
            "/api/v1/transactions/regenerate",
            post(transactions::regenerate),
        )
        .route("/api/v1/cashflow/summary", get(cashflow::summary))
        .route("/api/v1/copilot/status", get(copilot::status))
        .route("/api/v1/copilot/ask", post(copilot::ask))
        .route("/api/v1/inventory", get(inventory::list))
        .route("/api/v1/inventory/transaction", post(inventory::record_sale))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
