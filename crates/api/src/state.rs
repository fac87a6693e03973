use std::sync::Arc;

use divesite_db::search::{SearchMode, TextSearch};

use crate::config::ServerConfig;
use crate::upload::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the rest is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: divesite_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Local-disk storage for uploaded images.
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    pub fn new(pool: divesite_db::DbPool, config: ServerConfig) -> Self {
        let uploads = Arc::new(UploadStore::new(config.upload_dir.clone()));
        Self {
            pool,
            config: Arc::new(config),
            uploads,
        }
    }

    /// Search filter for a list request, using the configured case mode.
    pub fn search<'a>(&self, term: Option<&'a str>) -> TextSearch<'a> {
        let term = term.filter(|t| !t.trim().is_empty());
        TextSearch::new(
            term,
            SearchMode::from_case_sensitive(self.config.search_case_sensitive),
        )
    }
}
