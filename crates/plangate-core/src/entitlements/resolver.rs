//! EntitlementResolver — central authority for feature gating decisions.
//! Answers access, limit, minimum-tier, and upgrade-prompt queries.

use tracing::{debug, warn};

use crate::config::{EntitlementConfig, UnknownFeaturePolicy};
use crate::errors::{EntitlementError, EntitlementResult};

use super::catalog;
use super::feature::{Entitlement, FeatureKey, Quota};
use super::normalizer::{normalize_feature_key, resolve_feature};
use super::tier::Tier;

/// Result of a feature gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureAccess {
    Allowed,
    Denied {
        feature: String,
        required_tier: Tier,
        current_tier: Tier,
    },
}

impl FeatureAccess {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn denial_message(&self) -> Option<String> {
        match self {
            Self::Denied {
                feature,
                required_tier,
                current_tier,
            } => Some(format!(
                "Feature '{}' requires the {} plan (current plan: {})",
                feature, required_tier, current_tier
            )),
            Self::Allowed => None,
        }
    }
}

/// Stateless resolver over the static catalog.
///
/// Feature arguments are caller strings: aliases and canonical keys are both
/// accepted. Keys missing from the catalog follow `UnknownFeaturePolicy`.
#[derive(Debug, Clone)]
pub struct EntitlementResolver {
    unknown_feature: UnknownFeaturePolicy,
    upgrade_url: Option<String>,
    warning_threshold: f64,
}

impl EntitlementResolver {
    pub fn new(config: &EntitlementConfig) -> Self {
        Self {
            unknown_feature: config.effective_unknown_feature(),
            upgrade_url: config.upgrade_url.clone(),
            warning_threshold: config.effective_warning_threshold(),
        }
    }

    pub fn unknown_feature_policy(&self) -> UnknownFeaturePolicy {
        self.unknown_feature
    }

    /// Usage percentage at which a quota is reported as near its limit.
    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    /// Raw catalog lookup after normalization. `None` for keys not in the catalog.
    pub fn limit(&self, tier: Tier, feature: &str) -> Option<Entitlement> {
        resolve_feature(feature).map(|f| catalog::entitlement(tier, f))
    }

    /// Strict lookup: unknown keys are an error instead of a policy fallback.
    pub fn try_limit(&self, tier: Tier, feature: &str) -> EntitlementResult<Entitlement> {
        self.limit(tier, feature)
            .ok_or_else(|| EntitlementError::UnknownFeature {
                key: normalize_feature_key(feature).into_owned(),
            })
    }

    /// Catalog entitlement, or the unknown-feature policy's stand-in.
    pub(crate) fn effective(&self, tier: Tier, feature: &str) -> Entitlement {
        match self.limit(tier, feature) {
            Some(e) => e,
            None => {
                warn!(
                    feature,
                    policy = ?self.unknown_feature,
                    "feature key not in catalog"
                );
                match self.unknown_feature {
                    UnknownFeaturePolicy::Allow => Entitlement::Quota(Quota::Unlimited),
                    UnknownFeaturePolicy::Deny => Entitlement::Quota(Quota::Limited(0)),
                }
            }
        }
    }

    /// Capabilities are returned as-is; a quota is accessible iff unlimited or > 0.
    pub fn has_access(&self, tier: Tier, feature: &str) -> bool {
        self.effective(tier, feature).grants_access()
    }

    /// First tier (ascending) with access; `Enterprise` if none grants it.
    pub fn minimum_tier_for(&self, feature: &str) -> Tier {
        Tier::ALL
            .into_iter()
            .find(|t| self.has_access(*t, feature))
            .unwrap_or(Tier::Enterprise)
    }

    /// Typed shortcut used by the configuration defaults.
    pub fn minimum_tier_for_key(&self, feature: FeatureKey) -> Tier {
        Tier::ALL
            .into_iter()
            .find(|t| catalog::entitlement(*t, feature).grants_access())
            .unwrap_or(Tier::Enterprise)
    }

    pub fn upgrade_message(&self, current: Tier, feature: &str) -> String {
        let required = self.minimum_tier_for(feature);
        let label = feature_label(feature);

        if required <= current {
            return format!("{label} is already available on your {current} plan.");
        }

        debug!(feature, %current, %required, "upgrade required");
        match &self.upgrade_url {
            Some(url) => format!("Upgrade to {required} to unlock {label}. Upgrade at {url}"),
            None => format!("Upgrade to {required} to unlock {label}."),
        }
    }

    /// Gate check with enough context to build a denial message.
    pub fn check(&self, tier: Tier, feature: &str) -> FeatureAccess {
        if self.has_access(tier, feature) {
            FeatureAccess::Allowed
        } else {
            FeatureAccess::Denied {
                feature: normalize_feature_key(feature).into_owned(),
                required_tier: self.minimum_tier_for(feature),
                current_tier: tier,
            }
        }
    }
}

impl Default for EntitlementResolver {
    fn default() -> Self {
        Self::new(&EntitlementConfig::default())
    }
}

fn feature_label(feature: &str) -> String {
    match resolve_feature(feature) {
        Some(f) => f.description().to_string(),
        None => format!("'{}'", feature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_zero_is_not_access() {
        let resolver = EntitlementResolver::default();
        assert!(!resolver.has_access(Tier::Basic, "apiCalls"));
        assert!(resolver.has_access(Tier::Pro, "apiCalls"));
    }

    #[test]
    fn deny_policy_blocks_unknown() {
        let resolver = EntitlementResolver::new(&EntitlementConfig {
            unknown_feature: Some(UnknownFeaturePolicy::Deny),
            ..Default::default()
        });
        assert!(!resolver.has_access(Tier::Enterprise, "teleportation"));
        assert_eq!(resolver.minimum_tier_for("teleportation"), Tier::Enterprise);
    }

    #[test]
    fn upgrade_message_includes_url_when_configured() {
        let resolver = EntitlementResolver::new(&EntitlementConfig {
            upgrade_url: Some("https://example.com/pricing".to_string()),
            ..Default::default()
        });
        let msg = resolver.upgrade_message(Tier::Basic, "whiteLabel");
        assert!(msg.contains("Enterprise"), "{msg}");
        assert!(msg.ends_with("https://example.com/pricing"), "{msg}");
    }
}
