//! User and API token repository.
//!
//! Tokens are opaque strings issued at login and deleted at logout;
//! presenting a deleted token is indistinguishable from presenting a
//! token that never existed.

use rusqlite::{params, OptionalExtension};
use serde::Serialize;
use tracing::debug;

use super::{map_unique_violation, now};
use crate::db::Database;
use crate::error::{Result, StoreError};

/// A user account. The password hash never leaves the store layer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Database {
    /// Creates a user with a pre-hashed password.
    pub fn create_user(&self, email: &str, password_hash: &str) -> Result<User> {
        if email.trim().is_empty() {
            return Err(StoreError::validation("email", "is required"));
        }

        let taken: bool = self.conn().query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
            params![email],
            |row| row.get(0),
        )?;
        if taken {
            return Err(StoreError::validation("email", "has already been taken"));
        }

        let conn = self.conn();
        conn.execute(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
            params![email, password_hash, now()],
        )?;
        let id = conn.last_insert_rowid();

        debug!(id = id, email = %email, "User created");
        Ok(User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Looks up a user by email. Returns `None` for unknown emails so the
    /// caller can produce a uniform authentication failure.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = self
            .conn()
            .query_row(
                "SELECT id, email, password_hash FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Returns the number of user accounts.
    pub fn count_users(&self) -> Result<i64> {
        let count = self
            .conn()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Persists a bearer token for a user. Tokens are unique; there is
    /// no pre-check here, the index alone rejects a collision.
    pub fn create_token(&self, user_id: i64, token: &str) -> Result<()> {
        self.conn()
            .execute(
                "INSERT INTO api_tokens (token, user_id, created_at) VALUES (?1, ?2, ?3)",
                params![token, user_id, now()],
            )
            .map_err(|e| map_unique_violation(e, "token", "has already been issued"))?;
        Ok(())
    }

    /// Resolves a bearer token to its user id, if the token is live.
    pub fn find_token_user(&self, token: &str) -> Result<Option<i64>> {
        let user_id = self
            .conn()
            .query_row(
                "SELECT user_id FROM api_tokens WHERE token = ?1",
                params![token],
                |row| row.get(0),
            )
            .optional()?;
        Ok(user_id)
    }

    /// Revokes a token. Revoking an already-revoked token is a no-op.
    pub fn revoke_token(&self, token: &str) -> Result<()> {
        self.conn()
            .execute("DELETE FROM api_tokens WHERE token = ?1", params![token])?;
        Ok(())
    }
}
