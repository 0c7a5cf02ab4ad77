//! Schema migrations.
//!
//! Migrations are plain SQL batches applied in order. The current schema
//! version is tracked in SQLite's `PRAGMA user_version`, so opening an
//! existing database only applies the migrations it is missing.

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// Ordered migration batches. Index + 1 == resulting `user_version`.
pub const MIGRATIONS: &[&str] = &[
    // v1: core translation tables
    r#"
    CREATE TABLE languages (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        code        TEXT NOT NULL UNIQUE,
        name        TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    );

    CREATE TABLE tags (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL UNIQUE,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    );

    CREATE TABLE translations (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        key         TEXT NOT NULL,
        value       TEXT NOT NULL,
        language_id INTEGER NOT NULL REFERENCES languages(id) ON DELETE CASCADE,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL,
        deleted_at  TEXT
    );

    CREATE INDEX translations_key_index ON translations(key);

    -- (key, language_id) must be unique among non-deleted rows only,
    -- so a deleted translation's key can be reused.
    CREATE UNIQUE INDEX translations_key_language_unique
        ON translations(key, language_id)
        WHERE deleted_at IS NULL;

    CREATE TABLE translation_tag (
        translation_id INTEGER NOT NULL REFERENCES translations(id) ON DELETE CASCADE,
        tag_id         INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
        PRIMARY KEY (translation_id, tag_id)
    );

    CREATE INDEX translation_tag_tag_id_index ON translation_tag(tag_id);
    "#,
    // v2: auth tables
    r#"
    CREATE TABLE users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at    TEXT NOT NULL
    );

    CREATE TABLE api_tokens (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        token      TEXT NOT NULL UNIQUE,
        user_id    INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        created_at TEXT NOT NULL
    );
    "#,
];

/// Applies any pending migrations to the connection.
pub fn migrate(conn: &Connection) -> Result<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for (idx, batch) in MIGRATIONS.iter().enumerate() {
        let version = (idx + 1) as i64;
        if version <= current {
            continue;
        }

        debug!(version = version, "Applying schema migration");
        conn.execute_batch(batch)?;
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}
