//! Film address extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use filmdb_core::types::FilmId;

use crate::routes::films::FILMS_PATH;
use crate::state::AppState;

/// Addresses of the film collection and its items, as seen by the client.
///
/// The prefix is `PUBLIC_BASE_URL` when configured, otherwise
/// `http://{Host}` from the request, otherwise empty (root-relative paths).
///
/// ```ignore
/// async fn handler(address: FilmAddress) -> String {
///     address.item(FilmId::new(3)) // "http://localhost:4711/films/3"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FilmAddress {
    base: String,
}

impl FilmAddress {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Address of the whole collection.
    pub fn collection(&self) -> String {
        format!("{}{FILMS_PATH}", self.base)
    }

    /// Address of a single film.
    pub fn item(&self, id: FilmId) -> String {
        format!("{}{FILMS_PATH}/{id}", self.base)
    }
}

impl FromRequestParts<AppState> for FilmAddress {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(base) = &state.config.public_base_url {
            return Ok(FilmAddress::new(base.clone()));
        }

        let base = parts
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(|host| format!("http://{host}"))
            .unwrap_or_default();

        Ok(FilmAddress::new(base))
    }
}
