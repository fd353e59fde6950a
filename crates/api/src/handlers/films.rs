//! Handlers for the film collection and film items.
//!
//! Collection endpoints create, list, and clear films; item endpoints read,
//! replace, and delete a single film by the address returned on creation.

use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmdb_core::codec::{FilmCollection, FilmListItem, FilmView, ViewKind};
use filmdb_core::types::FilmId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::address::FilmAddress;
use crate::middleware::film_body::FilmBody;
use crate::state::AppState;

/// Query parameters for `GET /films`.
///
/// `view` stays a plain string so an unknown value never rejects the listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub view: Option<String>,
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// POST /films
///
/// Store a new film. Responds 201 with the film's address in `Location`.
pub async fn create_film(
    State(state): State<AppState>,
    address: FilmAddress,
    FilmBody(film): FilmBody,
) -> AppResult<impl IntoResponse> {
    let id = state.store.create(film.clone()).await?;
    let href = address.item(id);

    tracing::info!(film_id = %id, title = %film.title, "Film created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, href.clone())],
        Json(FilmView { film, href }),
    ))
}

/// GET /films
///
/// List all live films in creation order. `?view=compact` reduces each item
/// to its title and address.
pub async fn list_films(
    State(state): State<AppState>,
    address: FilmAddress,
    Query(params): Query<ListParams>,
) -> Json<FilmCollection> {
    let view = ViewKind::from_query(params.view.as_deref());
    let items: Vec<FilmListItem> = state
        .store
        .list()
        .await
        .into_iter()
        .map(|(id, film)| FilmListItem::new(view, film, address.item(id)))
        .collect();

    Json(FilmCollection {
        count: items.len(),
        items,
        href: address.collection(),
    })
}

/// DELETE /films
///
/// Remove every film. Succeeds on an empty collection too.
pub async fn clear_films(State(state): State<AppState>) -> StatusCode {
    let removed = state.store.clear().await;

    tracing::info!(removed, "Film collection cleared");

    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// GET /films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    address: FilmAddress,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: FilmId = raw_id.parse()?;
    let film = state.store.get(id).await?;

    Ok(Json(FilmView {
        film,
        href: address.item(id),
    }))
}

/// PUT /films/{id}
///
/// Replace a film wholesale and return the stored value.
pub async fn update_film(
    State(state): State<AppState>,
    address: FilmAddress,
    Path(raw_id): Path<String>,
    FilmBody(film): FilmBody,
) -> AppResult<impl IntoResponse> {
    let id: FilmId = raw_id.parse()?;
    state.store.update(id, film.clone()).await?;

    tracing::info!(film_id = %id, title = %film.title, "Film updated");

    Ok(Json(FilmView {
        film,
        href: address.item(id),
    }))
}

/// DELETE /films/{id}
pub async fn delete_film(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: FilmId = raw_id.parse()?;
    state.store.delete(id).await?;

    tracing::info!(film_id = %id, "Film deleted");

    Ok(StatusCode::OK)
}
