//! Tag repository.

use std::collections::HashMap;

use glossa_core::Tag;
use rusqlite::{params, params_from_iter, OptionalExtension};
use tracing::debug;

use super::{in_placeholders, now};
use crate::db::Database;
use crate::error::{Result, StoreError};

impl Database {
    /// Lists all tags ordered by id.
    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, name FROM tags ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Tag {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Creates a tag with a unique name.
    pub fn create_tag(&self, name: &str) -> Result<Tag> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("name", "is required"));
        }

        let taken: bool = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM tags WHERE name = ?1)",
            params![name],
            |row| row.get(0),
        )?;
        if taken {
            return Err(StoreError::validation("name", "has already been taken"));
        }

        let ts = now();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO tags (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
            params![name, ts, ts],
        )?;
        let id = conn.last_insert_rowid();

        debug!(id = id, name = %name, "Tag created");
        Ok(Tag {
            id,
            name: name.to_string(),
        })
    }

    /// Fetches one tag by id.
    pub fn get_tag(&self, id: i64) -> Result<Tag> {
        self.conn()
            .query_row(
                "SELECT id, name FROM tags WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Tag {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StoreError::not_found("tag", id))
    }

    /// Validates that every id in the slice references an existing tag.
    pub fn ensure_tags_exist(&self, tag_ids: &[i64]) -> Result<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let sql = format!(
            "SELECT COUNT(DISTINCT id) FROM tags WHERE id IN ({})",
            in_placeholders(tag_ids.len())
        );
        let found: i64 = self
            .conn()
            .query_row(&sql, params_from_iter(tag_ids.iter()), |row| row.get(0))?;

        let mut distinct = tag_ids.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        if found as usize != distinct.len() {
            return Err(StoreError::validation("tags", "contains an unknown tag id"));
        }
        Ok(())
    }

    /// Loads the tags attached to each of the given translations, keyed
    /// by translation id. Used by the search eager-loading pass.
    pub fn tags_for_translations(
        &self,
        translation_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Tag>>> {
        let mut out: HashMap<i64, Vec<Tag>> = HashMap::new();
        if translation_ids.is_empty() {
            return Ok(out);
        }

        let sql = format!(
            "SELECT tt.translation_id, t.id, t.name
             FROM translation_tag tt
             JOIN tags t ON t.id = tt.tag_id
             WHERE tt.translation_id IN ({})
             ORDER BY t.id",
            in_placeholders(translation_ids.len())
        );

        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(translation_ids.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Tag {
                    id: row.get(1)?,
                    name: row.get(2)?,
                },
            ))
        })?;

        for row in rows {
            let (translation_id, tag) = row?;
            out.entry(translation_id).or_default().push(tag);
        }
        Ok(out)
    }
}
