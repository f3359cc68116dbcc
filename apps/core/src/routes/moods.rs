use super::SharedState;
use crate::database;
use crate::error::AppError;
use crate::models::{MoodEntry, MoodEntryCreate, MoodEntryUpdate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

fn not_found() -> AppError {
    AppError::NotFound("Mood entry not found".to_string())
}

/// Newest first.
pub async fn list_moods(State(state): State<SharedState>) -> Result<Json<Vec<MoodEntry>>, AppError> {
    Ok(Json(database::list_moods(&state.pool).await?))
}

pub async fn create_mood(
    State(state): State<SharedState>,
    Json(payload): Json<MoodEntryCreate>,
) -> Result<Json<MoodEntry>, AppError> {
    payload.validate()?;
    Ok(Json(database::create_mood(&state.pool, &payload).await?))
}

pub async fn get_mood(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<MoodEntry>, AppError> {
    database::get_mood(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn update_mood(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoodEntryUpdate>,
) -> Result<Json<MoodEntry>, AppError> {
    payload.validate()?;
    database::update_mood(&state.pool, id, &payload)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

pub async fn delete_mood(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if database::delete_mood(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}
