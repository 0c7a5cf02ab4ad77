//! Translation export cache.
//!
//! This module provides the read-through cache in front of the store's
//! export query, using Moka with TTL-based expiration plus an explicit
//! known-keys registry for bulk invalidation after translation
//! mutations.

pub mod invalidation;
pub mod keys;
pub mod translation_cache;

// Re-exports
pub use invalidation::InvalidationResult;
pub use keys::ExportKey;
pub use translation_cache::{CacheConfig, CacheError, TranslationCache};
