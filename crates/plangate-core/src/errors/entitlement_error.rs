//! Errors raised by the strict entitlement lookups.

use super::error_code::{self, PlanGateErrorCode};

/// Errors from strict tier/feature resolution.
///
/// The permissive entry points (`normalize_tier`, `EntitlementResolver::has_access`)
/// never produce these; they apply the configured fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    #[error("Unknown tier: '{input}'")]
    UnknownTier { input: String },

    #[error("Unknown feature key: '{key}'")]
    UnknownFeature { key: String },
}

impl PlanGateErrorCode for EntitlementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier { .. } => error_code::UNKNOWN_TIER,
            Self::UnknownFeature { .. } => error_code::UNKNOWN_FEATURE,
        }
    }
}

pub type EntitlementResult<T> = Result<T, EntitlementError>;
