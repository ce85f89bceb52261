use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::db::{CacheStore, ModelArtifacts};
use crate::models::{Catalog, SimilarityIndex};
use crate::services::MetadataProvider;

/// Shared application state
///
/// Built once at startup. Everything except the batch lock is read-only.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub index: Arc<SimilarityIndex>,
    pub provider: Arc<dyn MetadataProvider>,
    pub cache_store: Arc<CacheStore>,
    /// Held across load → enrich → persist so concurrent batch runs
    /// cannot overwrite each other's cache updates
    pub batch_lock: Arc<Mutex<()>>,
    pub catalog_limit: usize,
    pub recommendation_count: usize,
}

impl AppState {
    /// Creates the application state from loaded artifacts
    pub fn new(
        artifacts: ModelArtifacts,
        provider: Arc<dyn MetadataProvider>,
        cache_store: CacheStore,
    ) -> Self {
        Self {
            catalog: Arc::new(artifacts.catalog),
            index: Arc::new(artifacts.index),
            provider,
            cache_store: Arc::new(cache_store),
            batch_lock: Arc::new(Mutex::new(())),
            catalog_limit: 1000,
            recommendation_count: 5,
        }
    }

    /// Applies the limits from configuration
    pub fn with_config(mut self, config: &Config) -> Self {
        self.catalog_limit = config.catalog_limit;
        self.recommendation_count = config.recommendation_count;
        self
    }
}
