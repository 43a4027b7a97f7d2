//! SQLite-backed key-value store.
//!
//! Implements the `KeyValueStore` port on a single `kv_store` table with
//! upsert semantics. Each call borrows one pooled connection.

use std::sync::Arc;

use boardcount_core::KeyValueStore;
use boardcount_domain::Result;
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::manager::{map_sql_error, DbManager};

/// Key-value store persisted in SQLite.
pub struct SqliteKeyValueStore {
    db: Arc<DbManager>,
}

impl SqliteKeyValueStore {
    /// Wrap `db`, creating the schema if it is missing.
    pub fn new(db: Arc<DbManager>) -> Result<Self> {
        db.run_migrations()?;
        Ok(Self { db })
    }

    /// List stored keys in alphabetical order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.db.get_connection()?;
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key").map_err(map_sql_error)?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(map_sql_error)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(map_sql_error)?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.db.get_connection()?;
        conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
            row.get::<_, String>(0)
        })
        .optional()
        .map_err(map_sql_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.db.get_connection()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value],
        )
        .map_err(map_sql_error)?;
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}
