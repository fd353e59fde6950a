//! Film body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use filmdb_core::codec::{self, BodyEncoding};
use filmdb_core::error::CoreError;
use filmdb_core::film::Film;

use crate::error::AppError;

/// A film decoded from the request body.
///
/// Accepts a JSON film object, or a form body whose `data` field carries the
/// film JSON. Anything else is rejected as [`CoreError::Malformed`] before
/// the handler runs. Must be the last extractor of a handler.
#[derive(Debug, Clone)]
pub struct FilmBody(pub Film);

impl<S> FromRequest<S> for FilmBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| CoreError::Malformed(e.body_text()))?;

        let encoding = BodyEncoding::detect(content_type.as_deref(), &body);
        let film = codec::decode_body(encoding, &body)?;

        Ok(FilmBody(film))
    }
}
