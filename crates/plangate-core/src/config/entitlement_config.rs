//! Entitlement resolution configuration.

use serde::{Deserialize, Serialize};

/// What the resolver does with a feature key that is not in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFeaturePolicy {
    /// Absent key is freely accessible (unlimited).
    #[default]
    Allow,
    /// Absent key is not accessible (zero quota).
    Deny,
}

/// Configuration for the entitlement resolver and usage evaluator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntitlementConfig {
    /// Policy for feature keys missing from the catalog. Default: allow.
    pub unknown_feature: Option<UnknownFeaturePolicy>,
    /// Appended to upgrade prompts when set.
    pub upgrade_url: Option<String>,
    /// Usage percentage at which a quota counts as "near limit". Default: 80.
    pub warning_threshold_percent: Option<f64>,
}

impl EntitlementConfig {
    pub fn effective_unknown_feature(&self) -> UnknownFeaturePolicy {
        self.unknown_feature.unwrap_or_default()
    }

    /// Returns the warning threshold clamped to `0..=100`, defaulting to 80.
    pub fn effective_warning_threshold(&self) -> f64 {
        self.warning_threshold_percent
            .unwrap_or(80.0)
            .clamp(0.0, 100.0)
    }
}
