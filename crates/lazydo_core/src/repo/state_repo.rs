//! State storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide namespaced key/value text storage over the `app_state` table.
//! - Keep writes atomic so readers never observe a partial document.
//!
//! # Invariants
//! - `set` is an upsert; a key holds exactly one value.
//! - Values are opaque text; no parsing happens at this layer.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key/value storage contract for application state documents.
pub trait StateRepository {
    /// Reads the document stored under `key`, if any.
    fn get(&self, key: &str) -> DbResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous document.
    fn set(&self, key: &str, value: &str) -> DbResult<()>;

    /// Deletes the document under `key`; no-op when absent.
    fn remove(&self, key: &str) -> DbResult<()>;
}

/// SQLite-backed state repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> DbResult<()> {
        self.conn
            .execute("DELETE FROM app_state WHERE key = ?1;", [key])?;
        Ok(())
    }
}
