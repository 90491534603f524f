//! `SqliteConfigurationStore`: `IConfigurationStore` backed by one SQLite table.
//!
//! Documents are stored as JSON text, one row per entity id. `set` is an
//! upsert, so the last write wins.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use plangate_core::config::StorageConfig;
use plangate_core::configuration::Configuration;
use plangate_core::errors::StorageError;
use plangate_core::traits::storage::IConfigurationStore;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::connection::{self, sqe};

/// SQLite-backed configuration store.
///
/// A single connection behind a mutex; the engine's access pattern is one
/// small read or write per call.
pub struct SqliteConfigurationStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteConfigurationStore {
    /// Open a file-backed store with default settings.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        let conn = connection::open_file(path, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open at `config.db_path` (default `plangate.db`).
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open_with_config(Path::new(config.effective_db_path()), config)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Mutex::new(connection::open_in_memory()?),
            path: None,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Delete the document for `entity_id`. Returns whether one existed.
    pub fn remove(&self, entity_id: &str) -> Result<bool, StorageError> {
        let conn = self.lock()?;
        let deleted = conn
            .execute(
                "DELETE FROM configurations WHERE entity_id = ?1",
                params![entity_id],
            )
            .map_err(sqe)?;
        Ok(deleted > 0)
    }

    /// All stored entity ids, sorted.
    pub fn entity_ids(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT entity_id FROM configurations ORDER BY entity_id")
            .map_err(sqe)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(sqe)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(sqe)
    }

    /// Last write time for `entity_id` (ISO-8601 UTC), if stored.
    pub fn updated_at(&self, entity_id: &str) -> Result<Option<String>, StorageError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT updated_at FROM configurations WHERE entity_id = ?1",
            params![entity_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(sqe)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl IConfigurationStore for SqliteConfigurationStore {
    fn get(&self, entity_id: &str) -> Result<Option<Configuration>, StorageError> {
        let conn = self.lock()?;
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM configurations WHERE entity_id = ?1",
                params![entity_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqe)?;

        document
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| StorageError::CorruptDocument {
                    entity_id: entity_id.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    fn set(&self, entity_id: &str, config: &Configuration) -> Result<(), StorageError> {
        let document = serde_json::to_string(config)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO configurations (entity_id, document, updated_at)
             VALUES (?1, ?2, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
             ON CONFLICT(entity_id) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at",
            params![entity_id, document],
        )
        .map_err(sqe)?;
        debug!(entity_id, bytes = document.len(), "configuration row written");
        Ok(())
    }
}
