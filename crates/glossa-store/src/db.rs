//! Database handle.
//!
//! [`Database`] wraps a single SQLite connection behind a mutex and is
//! cheap to clone; every repository method locks the connection for the
//! duration of one query or transaction. SQLite itself serializes
//! conflicting writes, and the unique indexes enforce the domain
//! invariants even under concurrent callers.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use tracing::info;

use crate::error::Result;
use crate::schema;

/// Shared handle to the relational store.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (or creates) the database at the given path and applies any
    /// pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Opened translation store");
        Self::init(conn)
    }

    /// Opens an in-memory database. Used by tests and the doc examples.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::migrate(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Locks the underlying connection. Crate-internal: repositories use
    /// this for single queries and transactions; the guard must not be
    /// held across an await point.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
