//! Per-client key-value storage, the server-side stand-in for a browser's
//! local storage. Every client (one browser profile) gets its own namespace.

pub mod memory;
mod migrations;

use std::path::Path;
use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{OpenFlags, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;

pub use memory::MemoryBackend;

pub type DbPool = Pool<SqliteConnectionManager>;

pub trait StorageBackend: Send + Sync {
    fn get_item(&self, client_id: &str, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, client_id: &str, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, client_id: &str, key: &str) -> AppResult<()>;
}

pub fn create_pool(sqlite_path: &str) -> anyhow::Result<DbPool> {
    let manager = if sqlite_path == ":memory:" {
        SqliteConnectionManager::memory()
    } else {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(sqlite_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        SqliteConnectionManager::file(sqlite_path).with_flags(
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_FULL_MUTEX,
        )
    };

    let manager = manager.with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    // Every in-memory connection is its own database, so keep exactly one.
    let max_size = if sqlite_path == ":memory:" { 1 } else { 10 };
    let pool = Pool::builder().max_size(max_size).build(manager)?;

    // Run migrations
    let conn = pool.get()?;
    migrations::run(&conn)?;

    Ok(pool)
}

pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StorageBackend for SqliteBackend {
    fn get_item(&self, client_id: &str, key: &str) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE client_id = ?1 AND key = ?2",
                rusqlite::params![client_id, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, client_id: &str, key: &str, value: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        let now = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        conn.execute(
            "INSERT INTO local_storage (client_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(client_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![client_id, key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&self, client_id: &str, key: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM local_storage WHERE client_id = ?1 AND key = ?2",
            rusqlite::params![client_id, key],
        )?;
        Ok(())
    }
}

/// A backend bound to one client, mirroring the browser `localStorage` API.
#[derive(Clone)]
pub struct LocalStorage {
    backend: Arc<dyn StorageBackend>,
    client_id: String,
}

impl LocalStorage {
    pub fn new(backend: Arc<dyn StorageBackend>, client_id: impl Into<String>) -> Self {
        Self {
            backend,
            client_id: client_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.backend.get_item(&self.client_id, key)
    }

    pub fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.backend.set_item(&self.client_id, key, value)
    }

    pub fn remove_item(&self, key: &str) -> AppResult<()> {
        self.backend.remove_item(&self.client_id, key)
    }

    /// Read and decode a JSON value. A value that does not decode is treated
    /// as missing so callers fall back to their defaults.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.get_item(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(client = %self.client_id, key, "Discarding unreadable stored value: {e}");
                Ok(None)
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw)
    }
}
