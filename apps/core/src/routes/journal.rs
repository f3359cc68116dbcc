use super::SharedState;
use crate::database;
use crate::error::AppError;
use crate::models::{JournalEntry, JournalEntryCreate, JournalEntryUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

fn not_found() -> AppError {
    AppError::NotFound("Journal entry not found".to_string())
}

pub async fn list_journal(
    State(state): State<SharedState>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    Ok(Json(database::list_journal(&state.pool).await?))
}

pub async fn create_entry(
    State(state): State<SharedState>,
    Json(payload): Json<JournalEntryCreate>,
) -> Result<Json<JournalEntry>, AppError> {
    Ok(Json(database::create_journal(&state.pool, &payload).await?))
}

pub async fn get_entry(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<JournalEntry>, AppError> {
    database::get_journal(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn update_entry(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<JournalEntryUpdate>,
) -> Result<Json<JournalEntry>, AppError> {
    database::update_journal(&state.pool, id, &payload)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_entry(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if database::delete_journal(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
