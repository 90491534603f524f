//! Storage-layer errors for configuration stores.

use super::error_code::{self, PlanGateErrorCode};

/// Errors that can occur in a configuration store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Stored document for '{entity_id}' is not valid JSON: {message}")]
    CorruptDocument { entity_id: String, message: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl PlanGateErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::CorruptDocument { .. } | Self::Serialization(_) => {
                error_code::SERIALIZATION_ERROR
            }
            Self::LockPoisoned => error_code::LOCK_POISONED,
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
        }
    }
}
