//! # Storage Access Layer
//!
//! `Store` owns the single SQLite connection of the process. It is built once in
//! `main` and handed to the handlers as `web::Data<Store>`; tests build their own
//! with `Store::in_memory`.
//!
//! ## Sub-modules:
//! - `schema`: table definitions, applied every time a store is opened.
//! - `checklists`: checklists and the tasks they own.
//! - `templates`: templates and their shared association with checklists.
//!
//! Lookups of a missing row are not errors: getters return `Ok(None)` and
//! mutations return `Ok(false)`. Every mutation runs inside one transaction.

mod checklists;
mod schema;
mod templates;

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Database connection lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Thread-safe handle to the checklist database.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens (or creates) the database file at `path` and makes sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Create an in-memory store for testing
    #[cfg(test)]
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        schema::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Runs raw SQL against the connection, used by tests to break the schema.
    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        self.conn()?.execute_batch(sql)?;
        Ok(())
    }
}

fn row_exists(conn: &Connection, table: &str, id: i64) -> rusqlite::Result<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table);
    Ok(conn
        .query_row(&sql, [id], |_| Ok(()))
        .optional()?
        .is_some())
}
