//! # Glossa Store
//!
//! SQLite-backed relational store for the Glossa translation server.
//!
//! This crate owns the four relational tables (`languages`, `tags`,
//! `translations`, `translation_tag`) plus the auth tables (`users`,
//! `api_tokens`), and exposes the repositories the HTTP layer consumes.
//!
//! ## Features
//!
//! - Bundled SQLite with WAL mode, no system library required
//! - `user_version`-tracked schema migrations run on open
//! - Soft deletes for translations (`deleted_at`), with a partial unique
//!   index enforcing `(key, language_id)` uniqueness among live rows
//! - Filtered, paginated translation search with eager language/tag loading
//! - Grouped export query feeding the server-side translation cache
//!
//! ## Example
//!
//! ```
//! use glossa_core::{LanguageInput, TranslationInput};
//! use glossa_store::Database;
//!
//! let db = Database::open_in_memory()?;
//!
//! let lang = db.create_language(&LanguageInput {
//!     code: "en".into(),
//!     name: "English".into(),
//! })?;
//!
//! db.create_translation(&TranslationInput {
//!     key: "hi".into(),
//!     value: "Hello".into(),
//!     language_id: lang.id,
//!     tags: None,
//! })?;
//!
//! let export = db.export_translations(&[], &[])?;
//! assert_eq!(export["en"]["hi"], "Hello");
//! # Ok::<(), glossa_store::StoreError>(())
//! ```

pub mod db;
pub mod error;
pub mod repository;
pub mod schema;
pub mod search;

// Re-exports
pub use db::Database;
pub use error::StoreError;
pub use repository::users::User;

// Re-export glossa_core for consumers
pub use glossa_core;
