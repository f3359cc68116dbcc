//! HTTP API.
//!
//! JSON endpoints live under `/api`; everything else falls through to the
//! static frontend.

pub mod chat;
pub mod eeg;
pub mod health;
pub mod journal;
pub mod moods;
pub mod resources;

use crate::chat::ChatService;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use sqlx::sqlite::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub pool: SqlitePool,
    pub chat: ChatService,
}

pub type SharedState = Arc<AppState>;

/// Routes mounted under `/api`.
pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health::health))
        // Mood entries
        .route("/moods", get(moods::list_moods).post(moods::create_mood))
        .route("/moods/", get(moods::list_moods).post(moods::create_mood))
        .route(
            "/moods/:id",
            get(moods::get_mood)
                .patch(moods::update_mood)
                .delete(moods::delete_mood),
        )
        // Journal entries
        .route(
            "/journal",
            get(journal::list_journal).post(journal::create_entry),
        )
        .route(
            "/journal/",
            get(journal::list_journal).post(journal::create_entry),
        )
        .route(
            "/journal/:id",
            get(journal::get_entry)
                .patch(journal::update_entry)
                .delete(journal::delete_entry),
        )
        // Crisis resources
        .route("/resources", get(resources::list_resources))
        .route("/resources/", get(resources::list_resources))
        // Chat
        .route("/chat", post(chat::chat))
        // EEG feature scoring
        .route("/eeg/predict/:target", post(eeg::predict))
        .route("/eeg/predict/batch/:target", post(eeg::predict_batch))
        .route("/eeg/sample.csv", get(eeg::sample_csv))
        .route("/eeg/sample", get(eeg::sample_csv))
}

/// Full application: API, static frontend, CORS, tracing and upload limit.
pub fn app(state: SharedState, static_dir: &Path, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
