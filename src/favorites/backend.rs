use std::collections::HashMap;
use std::path::Path;

use parking_lot::Mutex;
use rusqlite::Connection;

use crate::database;
use crate::models::Result;

/// String key-value persistence consumed by the favorites store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed store living in the app data directory
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = database::init_database(path)?;
        tracing::debug!("Opened favorites database at {:?}", path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(database::init_memory_database()?),
        })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(database::get_value(&self.conn.lock(), key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(database::upsert_value(&self.conn.lock(), key, value)?)
    }

    fn remove(&self, key: &str) -> Result<()> {
        database::delete_value(&self.conn.lock(), key)?;
        Ok(())
    }
}

/// Process-local store, used for `--no-persist` sessions and tests
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().remove(key);
        Ok(())
    }
}
