//! Error types for Glossa.
//!
//! This module defines the domain-level error vocabulary shared across
//! the Glossa crates. All errors implement the standard `std::error::Error`
//! trait via `thiserror`.
//!
//! # Error Handling Philosophy
//!
//! Glossa follows Rust's explicit error handling approach:
//! - Functions that can fail return `Result<T, GlossaError>`
//! - Errors are values, not control flow
//! - Validation failures carry the offending field so the API layer can
//!   report field-level detail
//!
//! # Example
//!
//! ```
//! use glossa_core::{GlossaError, Result};
//!
//! fn check_code(code: &str) -> Result<()> {
//!     if code.len() > 10 {
//!         return Err(GlossaError::validation(
//!             "code",
//!             "must be at most 10 characters",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_code("en").is_ok());
//! assert!(check_code("way-too-long-code").is_err());
//! ```

use thiserror::Error;

/// Domain error type for Glossa operations.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// An entity was not found for the given id.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind ("language", "tag", "translation", ...)
        entity: String,
        /// The id that was requested
        id: i64,
    },

    /// A field failed validation (missing, malformed, or not unique).
    #[error("validation failed for field '{field}': {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Generic internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GlossaError {
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

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
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

/// Type alias for Results with GlossaError.
pub type Result<T> = std::result::Result<T, GlossaError>;
