//! Search filter and pagination types.
//!
//! A [`SearchFilter`] describes one filtered, paginated listing request.
//! All filters are explicit optional fields: an absent field means "do not
//! filter on this", an empty string is treated as absent by the API layer
//! before the filter is built.

use serde::Serialize;

use crate::error::{GlossaError, Result};

/// Default page size when the client does not send `per_page`.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Matching policy for the `key` filter.
///
/// If the client-supplied pattern contains the `%` wildcard it is used as
/// a `LIKE` pattern verbatim; otherwise the key must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    /// Exact match on the key column.
    Exact(String),
    /// `LIKE` pattern match (the pattern already contains wildcards).
    Like(String),
}

impl KeyPattern {
    /// Builds a pattern from raw client input.
    ///
    /// # Example
    ///
    /// ```
    /// use glossa_core::KeyPattern;
    ///
    /// assert_eq!(
    ///     KeyPattern::from_input("menu.title"),
    ///     KeyPattern::Exact("menu.title".to_string())
    /// );
    /// assert_eq!(
    ///     KeyPattern::from_input("menu.%"),
    ///     KeyPattern::Like("menu.%".to_string())
    /// );
    /// ```
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        if input.contains('%') {
            Self::Like(input)
        } else {
            Self::Exact(input)
        }
    }

    /// Returns the underlying pattern string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(s) | Self::Like(s) => s,
        }
    }
}

/// A filtered, paginated query over translations.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Exact match on the owning language.
    pub language_id: Option<i64>,
    /// Translations having this tag attached.
    pub tag_id: Option<i64>,
    /// Key filter, exact or `LIKE` depending on wildcard presence.
    pub key: Option<KeyPattern>,
    /// Case-sensitive substring match on the value column.
    pub value: Option<String>,
    /// 1-based page number. `None` means page 1.
    pub page: Option<u32>,
    /// Page size. `None` means [`DEFAULT_PER_PAGE`].
    pub per_page: Option<u32>,
}

impl SearchFilter {
    /// Returns the effective 1-based page.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Returns the effective page size.
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Returns the row offset for the effective page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page() - 1) * u64::from(self.per_page())
    }

    /// Validates the pagination input.
    ///
    /// Fails only on non-positive `page` or `per_page`; empty result sets
    /// are never an error.
    pub fn validate(&self) -> Result<()> {
        if self.page == Some(0) {
            return Err(GlossaError::validation("page", "must be at least 1"));
        }
        if self.per_page == Some(0) {
            return Err(GlossaError::validation("per_page", "must be at least 1"));
        }
        Ok(())
    }
}

/// One page of results, sufficient to compute the last page.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    /// Returns the number of the last page (at least 1).
    pub fn last_page(&self) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
