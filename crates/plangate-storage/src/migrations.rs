//! Schema migrations, tracked with `PRAGMA user_version`.

use plangate_core::errors::StorageError;
use rusqlite::Connection;
use tracing::info;

/// Ordered migrations; index + 1 is the schema version each one produces.
const MIGRATIONS: &[&str] = &[
    // v1: configuration documents
    r#"
    CREATE TABLE IF NOT EXISTS configurations (
        entity_id TEXT PRIMARY KEY,
        document TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    ) STRICT;
    "#,
];

pub const LATEST_VERSION: u32 = MIGRATIONS.len() as u32;

pub fn schema_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}

/// Apply every migration above the current `user_version`. Idempotent.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = schema_version(conn)?;

    for (idx, sql) in MIGRATIONS.iter().enumerate() {
        let version = idx as u32 + 1;
        if version <= current {
            continue;
        }
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
        ))
        .map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK;");
            StorageError::MigrationFailed {
                version,
                message: e.to_string(),
            }
        })?;
        info!(version, "applied schema migration");
    }

    Ok(())
}
