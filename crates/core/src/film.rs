//! The film record.

use serde::{Deserialize, Serialize};

/// Wire names of the six film fields, in canonical order.
pub const FILM_FIELDS: [&str; 6] = [
    "title",
    "originalTitle",
    "productionYear",
    "length",
    "director",
    "actors",
];

/// A film record. All fields are free-form strings and are stored exactly as
/// submitted.
///
/// Deserialization is strict: every field must be present, every value must be
/// a JSON string, and no other keys are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Film {
    pub title: String,
    pub original_title: String,
    pub production_year: String,
    pub length: String,
    pub director: String,
    pub actors: String,
}
