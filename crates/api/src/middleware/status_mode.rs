//! Error status mode middleware.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::config::ErrorStatusMode;
use crate::error::LegacyNotFound;
use crate::state::AppState;

/// In [`ErrorStatusMode::Legacy`], rewrite duplicate and malformed
/// rejections to `404 Not Found`. Strict mode passes responses through.
pub async fn apply_status_mode(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if state.config.error_status_mode == ErrorStatusMode::Legacy
        && response.extensions().get::<LegacyNotFound>().is_some()
    {
        *response.status_mut() = StatusCode::NOT_FOUND;
    }

    response
}
