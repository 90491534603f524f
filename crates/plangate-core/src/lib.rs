//! # plangate-core
//!
//! Tiered entitlement and configuration engine.
//! Defines the plan catalog, tier/feature normalization, entitlement
//! resolution, usage evaluation, and tier-scoped configuration documents.
//! Persistence is delegated to an injected `IConfigurationStore`.

pub mod config;
pub mod configuration;
pub mod entitlements;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PlanGateConfig;
pub use configuration::{
    ActiveFeatureCount, Configuration, ConfigurationManager, ExportEnvelope, SettingValue,
};
pub use entitlements::{
    normalize_feature_key, normalize_tier, Entitlement, EntitlementResolver, FeatureKey, Quota,
    Tier, UsageEvaluation, UsageSnapshot,
};
pub use errors::error_code::PlanGateErrorCode;
pub use traits::storage::{IConfigurationStore, InMemoryConfigurationStore};
