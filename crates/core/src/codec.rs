//! Wire codec for film records.
//!
//! Decoding turns a request body into a [`Film`] or a
//! [`CoreError::Malformed`]; nothing malformed ever reaches the store.
//! Encoding goes through the view types below, which add the item address
//! (`href`) next to the film fields without touching the field values.

use serde::Serialize;
use url::form_urlencoded;

use crate::error::CoreError;
use crate::film::Film;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const FORM_DATA_PREFIX: &[u8] = b"data=";

/// How a submitted film body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// The body is the film object itself.
    Json,
    /// A percent-encoded form whose `data` field holds the film object.
    Form,
    /// `data=` followed by the film JSON, sent verbatim without a content
    /// type. Nothing after the prefix is unescaped.
    RawData,
}

impl BodyEncoding {
    /// Pick the encoding from the request's content type.
    ///
    /// Older clients send `data={...}` without any content type; those bodies
    /// are read as [`BodyEncoding::RawData`].
    pub fn detect(content_type: Option<&str>, body: &[u8]) -> Self {
        match content_type {
            Some(ct) if is_form_media_type(ct) => BodyEncoding::Form,
            None if body.starts_with(FORM_DATA_PREFIX) => BodyEncoding::RawData,
            _ => BodyEncoding::Json,
        }
    }
}

/// Media types compare case-insensitively and ignore parameters.
fn is_form_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(FORM_CONTENT_TYPE)
}

/// Decode a film body in the given encoding.
pub fn decode_body(encoding: BodyEncoding, body: &[u8]) -> Result<Film, CoreError> {
    match encoding {
        BodyEncoding::Json => decode_film(body),
        BodyEncoding::Form => decode_form(body),
        BodyEncoding::RawData => decode_raw_data(body),
    }
}

/// Decode a JSON film body.
pub fn decode_film(body: &[u8]) -> Result<Film, CoreError> {
    serde_json::from_slice::<Film>(body).map_err(|e| CoreError::Malformed(e.to_string()))
}

/// Decode a form body carrying the film JSON in its `data` field.
pub fn decode_form(body: &[u8]) -> Result<Film, CoreError> {
    let data = form_urlencoded::parse(body)
        .find(|(key, _)| key == "data")
        .map(|(_, value)| value)
        .ok_or_else(|| CoreError::Malformed("missing form field `data`".into()))?;
    decode_film(data.as_bytes())
}

/// Decode `data=` followed by unescaped film JSON.
pub fn decode_raw_data(body: &[u8]) -> Result<Film, CoreError> {
    let json = body
        .strip_prefix(FORM_DATA_PREFIX)
        .ok_or_else(|| CoreError::Malformed("missing `data=` prefix".into()))?;
    decode_film(json)
}

/// Which representation a listing uses for its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewKind {
    /// All six fields plus `href`.
    #[default]
    Full,
    /// `title` plus `href`.
    Compact,
}

/// Full representation of a stored film.
#[derive(Debug, Clone, Serialize)]
pub struct FilmView {
    #[serde(flatten)]
    pub film: Film,
    pub href: String,
}

/// Compact representation used by collection listings.
#[derive(Debug, Clone, Serialize)]
pub struct CompactFilmView {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FilmListItem {
    Full(FilmView),
    Compact(CompactFilmView),
}

impl ViewKind {
    /// Read the `view` query value. Anything other than `compact` (any case)
    /// falls back to the full view, so a listing never fails on it.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("compact") => ViewKind::Compact,
            _ => ViewKind::Full,
        }
    }
}

impl FilmListItem {
    pub fn new(kind: ViewKind, film: Film, href: String) -> Self {
        match kind {
            ViewKind::Full => FilmListItem::Full(FilmView { film, href }),
            ViewKind::Compact => FilmListItem::Compact(CompactFilmView {
                title: film.title,
                href,
            }),
        }
    }
}

/// Body of a collection listing.
#[derive(Debug, Clone, Serialize)]
pub struct FilmCollection {
    pub items: Vec<FilmListItem>,
    pub count: usize,
    pub href: String,
}
