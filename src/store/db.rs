// PRDatabase — SQLite Database Management
//
// Opens the single-file SQLite database that backs the key-value store and
// creates its schema. The database plays the role a browser's local storage
// plays for a web client: one flat table of string keys and JSON values.

use std::path::Path;

use rusqlite::Connection;

use super::StoreError;

/// Wrapper around the SQLite connection holding the key-value table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at the given path.
    /// Missing parent directories are created.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.run_migrations()?;

        tracing::debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// Open an in-memory database (for testing only).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv_store (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            ",
        )?;

        tracing::debug!("Database migrations completed successfully");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_succeeds() {
        let db = Database::open_in_memory();
        assert!(db.is_ok(), "Should be able to open an in-memory database");
    }

    #[test]
    fn test_schema_migration_creates_kv_table() {
        let db = Database::open_in_memory().unwrap();

        let count: i64 = db
            .conn()
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='kv_store'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "kv_store table should exist");
    }

    #[test]
    fn test_schema_migration_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        assert!(
            db.run_migrations().is_ok(),
            "Migrations should be idempotent"
        );
    }

    #[test]
    fn test_open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("vault").join("prdatabase.db");

        let result = Database::open(&db_path);
        assert!(result.is_ok(), "Should create parent directories and open");
        assert!(db_path.exists());
    }

    #[test]
    fn test_reopen_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("prdatabase.db");

        {
            let db = Database::open(&db_path).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO kv_store (key, value, updated_at) VALUES ('k', '\"v\"', 'now')",
                    [],
                )
                .unwrap();
        }

        let db = Database::open(&db_path).unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT count(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Rows must survive reopening the file");
    }
}
