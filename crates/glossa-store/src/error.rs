//! Error types for the relational store.

use glossa_core::GlossaError;

/// Errors that can occur when working with the relational store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested entity was not found.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind ("language", "tag", "translation", ...)
        entity: String,
        /// The id that was requested
        id: i64,
    },

    /// A field failed validation (missing, malformed, or not unique).
    #[error("validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The underlying SQLite store failed.
    #[error("store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Creates a Validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<GlossaError> for StoreError {
    fn from(err: GlossaError) -> Self {
        match err {
            GlossaError::NotFound { entity, id } => Self::NotFound { entity, id },
            GlossaError::Validation { field, message } => Self::Validation { field, message },
            GlossaError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// Type alias for Results with StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;
