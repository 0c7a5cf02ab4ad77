//! Translation repository.
//!
//! Translations are soft-deleted: `delete_translation` stamps
//! `deleted_at` and every read filters on `deleted_at IS NULL`. The
//! `(key, language_id)` uniqueness check only considers live rows, so a
//! deleted translation's key can be reused.

use glossa_core::{ExportMap, Translation, TranslationDetail, TranslationInput};
use rusqlite::{params, params_from_iter, OptionalExtension};
use tracing::debug;

use super::{in_placeholders, map_unique_violation, now, translation_from_row};
use crate::db::Database;
use crate::error::{Result, StoreError};

const SELECT_COLUMNS: &str =
    "id, key, value, language_id, created_at, updated_at, deleted_at";

impl Database {
    /// Fetches one live translation with its language and tags attached.
    pub fn get_translation(&self, id: i64) -> Result<TranslationDetail> {
        let translation = self
            .conn()
            .query_row(
                &format!(
                    "SELECT {SELECT_COLUMNS} FROM translations
                     WHERE id = ?1 AND deleted_at IS NULL"
                ),
                params![id],
                translation_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::not_found("translation", id))?;

        self.attach_relations(translation)
    }

    /// Creates a translation and attaches the given tags, if any.
    pub fn create_translation(&self, input: &TranslationInput) -> Result<TranslationDetail> {
        validate_translation_input(input)?;
        self.ensure_language_exists(input.language_id)?;
        self.ensure_key_free(&input.key, input.language_id, None)?;
        if let Some(tags) = &input.tags {
            self.ensure_tags_exist(tags)?;
        }

        let ts = now();
        let id = {
            let conn = self.conn();
            conn.execute(
                "INSERT INTO translations (key, value, language_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![input.key, input.value, input.language_id, ts, ts],
            )
            .map_err(|e| {
                // A concurrent create that slipped past ensure_key_free
                // lands on the unique index instead
                map_unique_violation(e, "key", "has already been taken for this language")
            })?;
            conn.last_insert_rowid()
        };

        if let Some(tags) = &input.tags {
            self.sync_tags(id, tags)?;
        }

        debug!(id = id, key = %input.key, language_id = input.language_id, "Translation created");
        self.get_translation(id)
    }

    /// Updates a translation; when `tags` is present the attachment set
    /// is replaced, otherwise it is left untouched.
    pub fn update_translation(
        &self,
        id: i64,
        input: &TranslationInput,
    ) -> Result<TranslationDetail> {
        validate_translation_input(input)?;
        // NotFound wins over validation for unknown rows
        self.get_translation(id)?;
        self.ensure_language_exists(input.language_id)?;
        self.ensure_key_free(&input.key, input.language_id, Some(id))?;
        if let Some(tags) = &input.tags {
            self.ensure_tags_exist(tags)?;
        }

        self.conn()
            .execute(
                "UPDATE translations SET key = ?1, value = ?2, language_id = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![input.key, input.value, input.language_id, now(), id],
            )
            .map_err(|e| {
                map_unique_violation(e, "key", "has already been taken for this language")
            })?;

        if let Some(tags) = &input.tags {
            self.sync_tags(id, tags)?;
        }

        debug!(id = id, "Translation updated");
        self.get_translation(id)
    }

    /// Soft-deletes a translation. The row and its tag attachments are
    /// retained in storage; normal reads no longer see it.
    pub fn delete_translation(&self, id: i64) -> Result<()> {
        let affected = self.conn().execute(
            "UPDATE translations SET deleted_at = ?1
             WHERE id = ?2 AND deleted_at IS NULL",
            params![now(), id],
        )?;
        if affected == 0 {
            return Err(StoreError::not_found("translation", id));
        }

        debug!(id = id, "Translation soft-deleted");
        Ok(())
    }

    /// Replaces the tag attachment set for a translation.
    pub fn sync_tags(&self, translation_id: i64, tag_ids: &[i64]) -> Result<()> {
        let mut distinct = tag_ids.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let mut conn = self.conn();
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM translation_tag WHERE translation_id = ?1",
            params![translation_id],
        )?;
        for tag_id in &distinct {
            tx.execute(
                "INSERT INTO translation_tag (translation_id, tag_id) VALUES (?1, ?2)",
                params![translation_id, tag_id],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Queries live translations, optionally restricted to languages and
    /// tags, and folds them into the export shape: language code first,
    /// translation key second. Later rows overwrite earlier ones under
    /// duplicate keys (last-write-wins; duplicates cannot occur while the
    /// uniqueness invariant holds).
    pub fn export_translations(&self, languages: &[i64], tags: &[i64]) -> Result<ExportMap> {
        let mut sql = String::from(
            "SELECT DISTINCT l.code, t.key, t.value, t.id
             FROM translations t
             JOIN languages l ON l.id = t.language_id",
        );
        let mut params: Vec<i64> = Vec::new();

        if !tags.is_empty() {
            sql.push_str(" JOIN translation_tag tt ON tt.translation_id = t.id");
        }

        sql.push_str(" WHERE t.deleted_at IS NULL");

        if !languages.is_empty() {
            sql.push_str(&format!(
                " AND t.language_id IN ({})",
                in_placeholders(languages.len())
            ));
            params.extend_from_slice(languages);
        }
        if !tags.is_empty() {
            sql.push_str(&format!(
                " AND tt.tag_id IN ({})",
                in_placeholders(tags.len())
            ));
            params.extend_from_slice(tags);
        }

        sql.push_str(" ORDER BY t.id");

        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut out = ExportMap::new();
        for row in rows {
            let (code, key, value) = row?;
            out.entry(code).or_default().insert(key, value);
        }
        Ok(out)
    }

    fn attach_relations(&self, translation: Translation) -> Result<TranslationDetail> {
        let language = self.get_language(translation.language_id)?;
        let mut tags_by_id = self.tags_for_translations(&[translation.id])?;
        let tags = tags_by_id.remove(&translation.id).unwrap_or_default();

        Ok(TranslationDetail {
            translation,
            language,
            tags,
        })
    }

    fn ensure_language_exists(&self, language_id: i64) -> Result<()> {
        let exists: bool = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM languages WHERE id = ?1)",
            params![language_id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(StoreError::validation(
                "language_id",
                "references an unknown language",
            ));
        }
        Ok(())
    }

    fn ensure_key_free(&self, key: &str, language_id: i64, ignore_id: Option<i64>) -> Result<()> {
        let taken: bool = self.conn().query_row(
            "SELECT EXISTS(
                 SELECT 1 FROM translations
                 WHERE key = ?1 AND language_id = ?2 AND deleted_at IS NULL AND id != ?3
             )",
            params![key, language_id, ignore_id.unwrap_or(0)],
            |row| row.get(0),
        )?;

        if taken {
            return Err(StoreError::validation(
                "key",
                "has already been taken for this language",
            ));
        }
        Ok(())
    }
}

fn validate_translation_input(input: &TranslationInput) -> Result<()> {
    if input.key.trim().is_empty() {
        return Err(StoreError::validation("key", "is required"));
    }
    if input.value.is_empty() {
        return Err(StoreError::validation("value", "is required"));
    }
    Ok(())
}
