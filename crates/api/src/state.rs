use std::sync::Arc;

use filmdb_core::store::FilmStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The film collection.
    pub store: Arc<FilmStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an empty store sized from `config`.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(FilmStore::with_capacity(config.store_capacity)),
            config: Arc::new(config),
        }
    }
}
