//! Configuration for the entitlement engine, loaded from TOML.

pub mod entitlement_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use entitlement_config::{EntitlementConfig, UnknownFeaturePolicy};
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlanGateConfig {
    pub entitlements: EntitlementConfig,
    pub storage: StorageConfig,
}

impl PlanGateConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
