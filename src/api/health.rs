// src/api/health.rs
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "Cash Flow Copilot API",
        "health": "/health",
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "cash-flow-copilot" }))
}

/// Public, read-only application settings. Never includes secrets.
pub async fn settings(State(state): State<AppState>) -> Json<Value> {
    let configured = state.config.copilot_available();
    Json(json!({
        "app_name": "Cash Flow Copilot",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "AI-powered cash flow visibility and Q&A for payments systems",
        "copilot_configured": configured,
        "copilot_model": if configured {
            Some(state.config.openai_model.clone())
        } else {
            None
        },
    }))
}
