use crate::types::FilmId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No live film at the given address. `id` is the raw address segment,
    /// which need not be a well-formed identifier.
    #[error("Film not found: {id}")]
    NotFound { id: String },

    #[error("Duplicate film: identical to film {existing}")]
    Duplicate { existing: FilmId },

    #[error("Malformed film: {0}")]
    Malformed(String),

    #[error("Film store is full ({capacity} films)")]
    CapacityExceeded { capacity: usize },
}

impl CoreError {
    pub fn not_found(id: FilmId) -> Self {
        CoreError::NotFound { id: id.to_string() }
    }
}
