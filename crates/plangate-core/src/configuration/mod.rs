//! Configuration documents scoped by tier.
//!
//! ## Components
//! - **document** — `Configuration`, `SettingValue`, active-feature counts
//! - **defaults** — tier increments table and cumulative default construction
//! - **validation** — downgrade / out-of-tier detection
//! - **envelope** — versioned JSON export envelope
//! - **manager** — `ConfigurationManager` over an injected store

pub mod defaults;
pub mod document;
pub mod envelope;
pub mod manager;
pub mod validation;

pub use defaults::{default_config, Increment, SettingKind, TIER_INCREMENTS};
pub use document::{ActiveFeatureCount, Configuration, Section, SettingValue};
pub use envelope::{ExportEnvelope, ENVELOPE_VERSION};
pub use manager::ConfigurationManager;
pub use validation::ConfigViolation;
