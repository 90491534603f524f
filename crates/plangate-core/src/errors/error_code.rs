//! Stable error codes exposed to bindings and HTTP layers.

/// Maps an error to a stable, SCREAMING_SNAKE code string.
pub trait PlanGateErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const UNKNOWN_TIER: &str = "UNKNOWN_TIER";
pub const UNKNOWN_FEATURE: &str = "UNKNOWN_FEATURE";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const LOCK_POISONED: &str = "LOCK_POISONED";
pub const MALFORMED_ENVELOPE: &str = "MALFORMED_ENVELOPE";
pub const ENTITY_MISMATCH: &str = "ENTITY_MISMATCH";
