use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use itemstore_core::DomainError;
use itemstore_infra::StoreError;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed a precondition. Never touches the store.
    #[error("{0}")]
    Validation(String),

    /// The document store could not serve the request.
    #[error("item store unavailable")]
    DependencyUnavailable(#[source] StoreError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.detail().to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::DependencyUnavailable(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(msg) => {
                tracing::debug!(%msg, "rejected request");
                json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
            }
            ApiError::DependencyUnavailable(e) => {
                tracing::warn!(error = %e, "item store call failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "dependency_unavailable",
                    "item store unavailable",
                )
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
