use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "Mindful Companion",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
