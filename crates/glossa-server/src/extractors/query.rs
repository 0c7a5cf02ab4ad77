//! Query parameter parsing.

use glossa_store::glossa_core::{KeyPattern, SearchFilter};
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for the translation listing endpoint.
///
/// Blank strings count as absent, matching the original duck-typed
/// "filled" checks with explicit optional fields.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ListQuery {
    pub language_id: Option<i64>,
    pub tag: Option<i64>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// Builds the typed search filter for the store layer.
    pub fn into_filter(self) -> SearchFilter {
        SearchFilter {
            language_id: self.language_id,
            tag_id: self.tag,
            key: self
                .key
                .filter(|k| !k.is_empty())
                .map(KeyPattern::from_input),
            value: self.value.filter(|v| !v.is_empty()),
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Language/tag id filters for the export endpoint.
///
/// Accepts both the `languages[]=1&languages[]=2` array convention and
/// plain repeated `languages=1&languages=2` pairs, so it is parsed from
/// the raw query string instead of through `serde_urlencoded` (which
/// does not collect repeated keys).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportQuery {
    pub languages: Vec<i64>,
    pub tags: Vec<i64>,
}

impl ExportQuery {
    /// Parses the raw query string of an export request.
    pub fn from_raw_query(raw: Option<&str>) -> Result<Self, AppError> {
        let mut out = Self::default();
        let Some(raw) = raw else {
            return Ok(out);
        };

        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = urlencoding::decode(name)
                .map_err(|_| AppError::BadRequest("malformed query string".to_string()))?;
            let value = urlencoding::decode(value)
                .map_err(|_| AppError::BadRequest("malformed query string".to_string()))?;

            let target = match name.as_ref() {
                "languages" | "languages[]" => &mut out.languages,
                "tags" | "tags[]" => &mut out.tags,
                _ => continue,
            };

            if value.is_empty() {
                continue;
            }
            let id: i64 = value.parse().map_err(|_| {
                AppError::BadRequest(format!("'{}' is not a valid id in '{}'", value, name))
            })?;
            target.push(id);
        }

        Ok(out)
    }
}
