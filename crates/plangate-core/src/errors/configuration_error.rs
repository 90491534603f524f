//! Configuration document errors (load/save/export/import).

use super::error_code::{self, PlanGateErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Malformed export envelope: {message}")]
    MalformedEnvelope { message: String },

    #[error("Envelope belongs to entity '{found}', expected '{expected}'")]
    EntityMismatch { expected: String, found: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanGateErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedEnvelope { .. } => error_code::MALFORMED_ENVELOPE,
            Self::EntityMismatch { .. } => error_code::ENTITY_MISMATCH,
            Self::Storage(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigurationError>;
