use super::SharedState;
use crate::models::{ChatRequest, ChatResponse};
use axum::extract::State;
use axum::Json;

/// Always answers; provider failures fall back to the scripted reply.
pub async fn chat(
    State(state): State<SharedState>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    Json(state.chat.respond(&req).await)
}
