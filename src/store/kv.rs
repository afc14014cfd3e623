// PRDatabase — Key-Value Store
//
// The raw persistence contract: string keys mapped to serialized JSON
// strings. Every write is visible to the next read; there are no
// transactions beyond a single key.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::db::Database;
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the durable key-value medium.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ─── SQLite Implementation ──────────────────────────────────────────────────

pub struct SqliteKeyValueStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteKeyValueStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl<'a> KeyValueStore for SqliteKeyValueStore<'a> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .db
            .conn()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        tracing::debug!(key = %key, found = value.is_some(), "Store read");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db.conn().execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!(key = %key, bytes = value.len(), "Store write");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let affected = self
            .db
            .conn()
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;

        tracing::debug!(key = %key, removed = affected > 0, "Store remove");
        Ok(())
    }
}

// ─── In-Memory Implementation ───────────────────────────────────────────────

/// A process-local map, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
