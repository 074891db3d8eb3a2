use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Result as SqliteResult};

/// Initialize the database and create tables if they don't exist
pub fn init_database(path: &Path) -> SqliteResult<Connection> {
    let conn = Connection::open(path)?;
    create_tables(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the same schema
pub fn init_memory_database() -> SqliteResult<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}

fn create_tables(conn: &Connection) -> SqliteResult<()> {
    // Generic key-value table; values are opaque strings (JSON for favorites)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Get a value by key
pub fn get_value(conn: &Connection, key: &str) -> SqliteResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .optional()
}

/// Insert or update a value (upsert)
pub fn upsert_value(conn: &Connection, key: &str, value: &str) -> SqliteResult<()> {
    let now = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
        (key, value, &now),
    )?;

    Ok(())
}

/// Delete a value. Returns true if a row was removed.
pub fn delete_value(conn: &Connection, key: &str) -> SqliteResult<bool> {
    let rows = conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
    Ok(rows > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Connection {
        init_memory_database().unwrap()
    }

    #[test]
    fn test_init_database_creates_tables() {
        let conn = setup_db();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv_store'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_missing_key_returns_none() {
        let conn = setup_db();
        assert_eq!(get_value(&conn, "nope").unwrap(), None);
    }

    #[test]
    fn test_upsert_and_get() {
        let conn = setup_db();
        upsert_value(&conn, "k", "[\"a\"]").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("[\"a\"]"));

        upsert_value(&conn, "k", "[]").unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_value() {
        let conn = setup_db();
        upsert_value(&conn, "k", "v").unwrap();
        assert!(delete_value(&conn, "k").unwrap());
        assert!(!delete_value(&conn, "k").unwrap());
        assert_eq!(get_value(&conn, "k").unwrap(), None);
    }

    #[test]
    fn test_init_database_on_disk_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockref.db");

        {
            let conn = init_database(&path).unwrap();
            upsert_value(&conn, "k", "persisted").unwrap();
        }

        let conn = init_database(&path).unwrap();
        assert_eq!(get_value(&conn, "k").unwrap().as_deref(), Some("persisted"));
    }
}
