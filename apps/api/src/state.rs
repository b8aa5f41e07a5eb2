use std::sync::Arc;

use crate::config::Config;
use crate::store::{DocumentStore, FileStore};
use crate::uploads::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns `portfolio.json` and `resume.json`. Default: `FileStore` over `config.storage_dir`.
    pub store: Arc<dyn DocumentStore>,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(FileStore::new(config.storage_dir.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        AppState {
            uploads: UploadStore::new(config.upload.clone()),
            store,
            config,
        }
    }
}
