pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the film service route tree.
///
/// Route hierarchy:
///
/// ```text
/// /films              list, create, clear
/// /films/{id}         get, replace, delete
/// ```
///
/// The health check is mounted separately by the app router.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(films::router())
}
