use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(system::health))
        .route("/items", get(items::list_items).post(items::create_item))
}
