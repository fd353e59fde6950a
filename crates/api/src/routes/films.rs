//! Route definitions for the film collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Path of the film collection; items live at `{FILMS_PATH}/{id}`.
pub const FILMS_PATH: &str = "/films";

/// Film routes.
///
/// ```text
/// GET    /films           -> list_films
/// POST   /films           -> create_film
/// DELETE /films           -> clear_films
/// GET    /films/{id}      -> get_film
/// PUT    /films/{id}      -> update_film
/// DELETE /films/{id}      -> delete_film
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            FILMS_PATH,
            get(films::list_films)
                .post(films::create_film)
                .delete(films::clear_films),
        )
        .route(
            "/films/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
}
