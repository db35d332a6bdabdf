//! Axum route handlers for the chat API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::answerer::answer;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/v1/chat
///
/// Answers one natural-language question about the job dataset.
/// Oracle failures never produce an error status — the pipeline degrades to
/// fixed fallback text, so only an empty message yields a 400.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = answer(
        &request.message,
        &state.dataset,
        state.oracle.as_ref(),
        &state.tables,
    )
    .await;

    Ok(Json(ChatResponse { response }))
}
