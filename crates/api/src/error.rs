use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use filmdb_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce consistent
/// JSON error responses. The status codes produced here are the strict ones;
/// in legacy mode [`crate::middleware::status_mode`] folds the rejections
/// marked with [`LegacyNotFound`] back into `404`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `filmdb_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Response extension marking a rejection that legacy clients expect to see
/// as `404 Not Found`.
#[derive(Debug, Clone, Copy)]
pub struct LegacyNotFound;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = &self;

        let (status, code, message) = match core {
            CoreError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Film with id {id} not found"),
            ),
            CoreError::Duplicate { existing } => (
                StatusCode::CONFLICT,
                "DUPLICATE",
                format!("Film already exists with id {existing}"),
            ),
            CoreError::Malformed(msg) => (StatusCode::BAD_REQUEST, "MALFORMED", msg.clone()),
            CoreError::CapacityExceeded { capacity } => {
                tracing::warn!(capacity, "Film store is full, rejecting create");
                (
                    StatusCode::INSUFFICIENT_STORAGE,
                    "CAPACITY_EXCEEDED",
                    core.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        let mut response = (status, axum::Json(body)).into_response();
        if matches!(core, CoreError::Duplicate { .. } | CoreError::Malformed(_)) {
            response.extensions_mut().insert(LegacyNotFound);
        }
        response
    }
}
