use axum::Json;

use crate::app::dto::HealthResponse;

/// Liveness: answers without consulting the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
