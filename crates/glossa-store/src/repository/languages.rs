//! Language repository.

use glossa_core::{Language, LanguageInput};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{language_from_row, map_unique_violation, now};
use crate::db::Database;
use crate::error::{Result, StoreError};

const SELECT_COLUMNS: &str = "id, code, name, created_at, updated_at";

/// Maximum length for a language code (e.g. "pt-BR").
pub const MAX_CODE_LEN: usize = 10;

/// Maximum length for a language name.
pub const MAX_NAME_LEN: usize = 255;

impl Database {
    /// Lists all languages ordered by id.
    pub fn list_languages(&self) -> Result<Vec<Language>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM languages ORDER BY id"
        ))?;
        let rows = stmt
            .query_map([], language_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Fetches one language by id.
    pub fn get_language(&self, id: i64) -> Result<Language> {
        self.conn()
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM languages WHERE id = ?1"),
                params![id],
                language_from_row,
            )
            .optional()?
            .ok_or_else(|| StoreError::not_found("language", id))
    }

    /// Creates a language. Fails validation if the code is taken, empty,
    /// or longer than [`MAX_CODE_LEN`].
    pub fn create_language(&self, input: &LanguageInput) -> Result<Language> {
        validate_language_input(input)?;
        self.ensure_code_free(&input.code, None)?;

        let ts = now();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO languages (code, name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![input.code, input.name, ts, ts],
        )
        .map_err(|e| {
            // A concurrent create that slipped past ensure_code_free
            // lands on the unique index instead
            map_unique_violation(e, "code", "has already been taken")
        })?;
        let id = conn.last_insert_rowid();
        drop(conn);

        debug!(id = id, code = %input.code, "Language created");
        self.get_language(id)
    }

    /// Updates a language, ignoring the row itself in the uniqueness check.
    pub fn update_language(&self, id: i64, input: &LanguageInput) -> Result<Language> {
        validate_language_input(input)?;
        // Fails with NotFound before touching uniqueness
        self.get_language(id)?;
        self.ensure_code_free(&input.code, Some(id))?;

        self.conn()
            .execute(
                "UPDATE languages SET code = ?1, name = ?2, updated_at = ?3 WHERE id = ?4",
                params![input.code, input.name, now(), id],
            )
            .map_err(|e| map_unique_violation(e, "code", "has already been taken"))?;

        self.get_language(id)
    }

    /// Deletes a language. Owned translations are removed by the cascade.
    pub fn delete_language(&self, id: i64) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM languages WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::not_found("language", id));
        }

        debug!(id = id, "Language deleted");
        Ok(())
    }

    fn ensure_code_free(&self, code: &str, ignore_id: Option<i64>) -> Result<()> {
        let taken: bool = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM languages WHERE code = ?1 AND id != ?2)",
            params![code, ignore_id.unwrap_or(0)],
            |row| row.get(0),
        )?;

        if taken {
            return Err(StoreError::validation("code", "has already been taken"));
        }
        Ok(())
    }
}

fn validate_language_input(input: &LanguageInput) -> Result<()> {
    if input.code.trim().is_empty() {
        return Err(StoreError::validation("code", "is required"));
    }
    if input.code.chars().count() > MAX_CODE_LEN {
        return Err(StoreError::validation(
            "code",
            format!("must be at most {MAX_CODE_LEN} characters"),
        ));
    }
    if input.name.trim().is_empty() {
        return Err(StoreError::validation("name", "is required"));
    }
    if input.name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::validation(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}
