//! Entity definitions for the Glossa translation store.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A language row from the `languages` table.
///
/// Owns many [`Translation`]s. The `code` is globally unique and at most
/// 10 characters (e.g. "en", "pt-BR").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A label attachable to many translations, many-to-many via
/// `translation_tag`. The `name` is globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A key/value pair of localized text scoped to one language.
///
/// `(key, language_id)` is unique among non-deleted rows. Rows are
/// soft-deleted: `deleted_at` is set instead of removing the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub language_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Translation {
    /// Returns true if the row has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A translation with its language and tags eagerly attached, so it can
/// be serialized without additional lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationDetail {
    pub translation: Translation,
    pub language: Language,
    pub tags: Vec<Tag>,
}

/// Input payload for creating or updating a [`Language`].
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageInput {
    pub code: String,
    pub name: String,
}

/// Input payload for creating or updating a [`Translation`].
///
/// `tags` replaces the attachment set when present; when absent the
/// existing attachments are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationInput {
    pub key: String,
    pub value: String,
    pub language_id: i64,
    #[serde(default)]
    pub tags: Option<Vec<i64>>,
}

/// Export payload: translations grouped by language code, then keyed by
/// translation key. BTreeMap keeps the serialized JSON deterministic.
pub type ExportMap = BTreeMap<String, BTreeMap<String, String>>;
