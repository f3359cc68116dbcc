use crate::models::ResourceItem;
use crate::resources::crisis_resources;
use axum::Json;

pub async fn list_resources() -> Json<Vec<ResourceItem>> {
    Json(crisis_resources())
}
