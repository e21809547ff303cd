// src/api/copilot.rs
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::{ApiError, AppState};
use crate::types::{CopilotAnswer, CopilotAsk};

/// Whether the copilot integration is configured.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    if state.config.copilot_available() {
        Json(json!({ "configured": true }))
    } else {
        Json(json!({
            "configured": false,
            "message": "Set APP_OPENAI_API_KEY in .env to enable the copilot.",
        }))
    }
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<CopilotAsk>,
) -> Result<Json<CopilotAnswer>, ApiError> {
    if !state.config.copilot_available() {
        return Err(ApiError::ServiceUnavailable(
            "Copilot is not configured. Set APP_OPENAI_API_KEY in .env.".to_string(),
        ));
    }
    if request.question.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "question must not be empty".to_string(),
        ));
    }

    let answer = state.copilot.ask(&request.question).await?;
    Ok(Json(answer))
}
