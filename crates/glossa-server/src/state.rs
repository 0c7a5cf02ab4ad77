//! Application state.

use glossa_store::Database;

use crate::cache::{CacheConfig, TranslationCache};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The relational store.
    db: Database,
    /// The translation export cache.
    cache: TranslationCache,
}

impl AppState {
    /// Creates a new AppState with the default cache configuration.
    pub fn new(db: Database) -> Self {
        Self::with_cache_config(db, CacheConfig::default())
    }

    /// Creates a new AppState with a custom cache configuration.
    pub fn with_cache_config(db: Database, cache_config: CacheConfig) -> Self {
        Self {
            db,
            cache: TranslationCache::new(cache_config),
        }
    }

    /// Returns a reference to the store.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Returns a reference to the translation cache.
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
