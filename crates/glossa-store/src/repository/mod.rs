//! Repositories for the Glossa entities.
//!
//! Each submodule extends [`Database`](crate::Database) with the
//! operations for one entity family. Row mapping helpers shared between
//! the repositories and the search module live here.

pub mod languages;
pub mod tags;
pub mod translations;
pub mod users;

use chrono::{DateTime, Utc};
use glossa_core::{Language, Translation};
use rusqlite::Row;

use crate::error::StoreError;

/// Current timestamp used for `created_at` / `updated_at` columns.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Maps a constraint failure on a write to a field-level validation
/// error; any other SQLite error passes through unchanged.
///
/// The repositories pre-check uniqueness to produce friendly messages,
/// but the check and the write take the connection mutex separately, so
/// a concurrent writer can slip between them. The unique index catches
/// that loser; it must surface as the same validation error, not as an
/// internal failure.
pub(crate) fn map_unique_violation(
    err: rusqlite::Error,
    field: &str,
    message: &str,
) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::validation(field, message)
        }
        _ => StoreError::Sqlite(err),
    }
}

/// Builds a `?,?,...` placeholder list for an `IN (...)` clause.
pub(crate) fn in_placeholders(count: usize) -> String {
    let mut out = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            out.push(',');
        }
        out.push('?');
    }
    out
}

/// Maps a `languages` row selected as `id, code, name, created_at, updated_at`.
pub(crate) fn language_from_row(row: &Row<'_>) -> rusqlite::Result<Language> {
    Ok(Language {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

/// Maps a `translations` row selected as
/// `id, key, value, language_id, created_at, updated_at, deleted_at`.
pub(crate) fn translation_from_row(row: &Row<'_>) -> rusqlite::Result<Translation> {
    Ok(Translation {
        id: row.get(0)?,
        key: row.get(1)?,
        value: row.get(2)?,
        language_id: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        deleted_at: row.get(6)?,
    })
}
