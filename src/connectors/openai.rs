// src/connectors/openai.rs
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ANSWER_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum CopilotError {
    #[error("Copilot request timed out. Please try again.")]
    Timeout,
    #[error("Could not connect to the AI service. Check APP_OPENAI_BASE_URL.")]
    Connection,
    #[error("AI service error: {message}")]
    Api { status: u16, message: String },
    #[error("The AI service returned an empty answer.")]
    EmptyAnswer,
    #[error("Unexpected error while contacting the AI service: {0}")]
    Protocol(String),
}

impl CopilotError {
    /// HTTP status the API layer should surface for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            CopilotError::Timeout => 504,
            _ => 502,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Thin client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Sends a system + user message pair and returns the first answer.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, CopilotError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            max_tokens: MAX_ANSWER_TOKENS,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            let message = extract_api_message(&payload);
            // Never log the request: it carries the bearer token.
            error!("AI service returned {}: {}", status, message);
            return Err(CopilotError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await.map_err(map_transport_error)?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(CopilotError::EmptyAnswer)
    }
}

fn map_transport_error(err: reqwest::Error) -> CopilotError {
    if err.is_timeout() {
        error!("AI service request timed out");
        CopilotError::Timeout
    } else if err.is_connect() {
        error!("Could not connect to AI service: {}", err);
        CopilotError::Connection
    } else {
        error!("AI service transport error: {}", err);
        CopilotError::Protocol(err.to_string())
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, with a safe
/// fallback when the payload is not the expected shape.
fn extract_api_message(payload: &str) -> String {
    serde_json::from_str::<Value>(payload)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Unknown API error".to_string())
}
