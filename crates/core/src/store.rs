//! In-memory film store.
//!
//! Films live in an insertion-ordered hash table keyed by [`FilmId`], with a
//! second table keyed by film value for duplicate detection. Both tables sit
//! behind one `RwLock`, so every operation is atomic with respect to the
//! others and no caller ever holds a reference into the store.

use std::collections::HashMap;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::film::Film;
use crate::types::FilmId;

/// Default maximum number of live films.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Default)]
struct Tables {
    films: IndexMap<FilmId, Film>,
    by_value: HashMap<Film, FilmId>,
    /// Next identifier to hand out. Never rewound.
    next_id: u64,
}

/// Thread-safe film store; designed to be wrapped in `Arc` and shared
/// across the application.
pub struct FilmStore {
    tables: RwLock<Tables>,
    capacity: usize,
}

impl FilmStore {
    /// Create an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` live films.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Store a new film and return its freshly allocated identifier.
    ///
    /// Rejects a film that is field-for-field equal to a live one. A failed
    /// create does not consume an identifier.
    pub async fn create(&self, film: Film) -> Result<FilmId, CoreError> {
        let mut tables = self.tables.write().await;

        if let Some(&existing) = tables.by_value.get(&film) {
            return Err(CoreError::Duplicate { existing });
        }
        if tables.films.len() >= self.capacity {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = FilmId::new(tables.next_id);
        tables.next_id += 1;
        tables.by_value.insert(film.clone(), id);
        tables.films.insert(id, film);
        Ok(id)
    }

    pub async fn get(&self, id: FilmId) -> Result<Film, CoreError> {
        self.tables
            .read()
            .await
            .films
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(id))
    }

    /// Replace the film at `id` wholesale. The identifier and the film's
    /// position in listings are unchanged.
    ///
    /// Replacing a film with a value equal to a *different* live film is a
    /// duplicate; replacing it with its own current value is a no-op.
    pub async fn update(&self, id: FilmId, film: Film) -> Result<(), CoreError> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        let Some(slot) = tables.films.get_mut(&id) else {
            return Err(CoreError::not_found(id));
        };

        match tables.by_value.get(&film) {
            Some(&existing) if existing == id => return Ok(()),
            Some(&existing) => return Err(CoreError::Duplicate { existing }),
            None => {}
        }

        let previous = std::mem::replace(slot, film.clone());
        tables.by_value.remove(&previous);
        tables.by_value.insert(film, id);
        Ok(())
    }

    pub async fn delete(&self, id: FilmId) -> Result<(), CoreError> {
        let mut tables = self.tables.write().await;

        let film = tables
            .films
            .shift_remove(&id)
            .ok_or_else(|| CoreError::not_found(id))?;
        tables.by_value.remove(&film);
        Ok(())
    }

    /// Snapshot of all live films in creation order.
    pub async fn list(&self) -> Vec<(FilmId, Film)> {
        self.tables
            .read()
            .await
            .films
            .iter()
            .map(|(id, film)| (*id, film.clone()))
            .collect()
    }

    /// Remove every live film. Returns how many were removed.
    ///
    /// The identifier counter is left alone, so identifiers issued before the
    /// clear are never handed out again.
    pub async fn clear(&self) -> usize {
        let mut tables = self.tables.write().await;
        let removed = tables.films.len();
        tables.films.clear();
        tables.by_value.clear();
        removed
    }

    /// Idempotent reset to an empty collection, for test setup.
    pub async fn reset(&self) {
        let removed = self.clear().await;
        tracing::debug!(removed, "Film store reset");
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.films.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for FilmStore {
    fn default() -> Self {
        Self::new()
    }
}
