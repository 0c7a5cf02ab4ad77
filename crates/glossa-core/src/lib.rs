//! Glossa Core - Domain types and traits
//!
//! This crate provides the foundational types for the Glossa translation
//! server: the entities stored in the relational store, the search filter
//! and page types, and the shared error type.

pub mod error;
pub mod search;
pub mod types;

// Re-exports
pub use error::{GlossaError, Result};
pub use search::{KeyPattern, Page, SearchFilter};
pub use types::{
    ExportMap, Language, LanguageInput, Tag, Translation, TranslationDetail, TranslationInput,
};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
