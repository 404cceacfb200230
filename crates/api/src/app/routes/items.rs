use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use itemstore_core::ItemName;

use crate::app::dto::{CreateItemRequest, ItemResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = services.list_items().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    // Validate before any store access.
    let name = ItemName::from_optional(body.name)?;

    let item = services.create_item(name).await?;
    tracing::debug!(name = %item.name(), "item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}
