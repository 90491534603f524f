//! Connection setup: open, PRAGMAs, migrations.

use std::path::Path;

use plangate_core::config::StorageConfig;
use plangate_core::errors::StorageError;
use rusqlite::Connection;

use crate::migrations;

pub(crate) fn sqe(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

/// Apply connection PRAGMAs. WAL is skipped for in-memory databases.
pub fn configure_connection(
    conn: &Connection,
    busy_timeout_ms: u64,
    wal: bool,
) -> Result<(), StorageError> {
    if wal {
        conn.execute_batch("PRAGMA journal_mode = WAL;").map_err(sqe)?;
    }
    conn.execute_batch(&format!(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA temp_store = MEMORY;
        "
    ))
    .map_err(sqe)
}

/// Open (or create) a file-backed database and bring its schema up to date.
pub fn open_file(path: &Path, config: &StorageConfig) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(sqe)?;
    configure_connection(&conn, config.effective_busy_timeout_ms(), true)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database (for tests and ephemeral use).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(sqe)?;
    configure_connection(&conn, StorageConfig::default().effective_busy_timeout_ms(), false)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
