//! Error types for every plangate subsystem.
//! Each enum maps to a stable code via `PlanGateErrorCode`.

pub mod configuration_error;
pub mod entitlement_error;
pub mod error_code;
pub mod storage_error;

pub use configuration_error::{ConfigResult, ConfigurationError};
pub use entitlement_error::{EntitlementError, EntitlementResult};
pub use error_code::PlanGateErrorCode;
pub use storage_error::StorageError;
