//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the persistent configuration store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file. Default: "plangate.db".
    pub db_path: Option<String>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or("plangate.db")
    }

    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(5000)
    }
}
