//! The plan catalog: Tier × FeatureKey → Entitlement.
//!
//! | Quota              | Basic | Pro    | Enterprise |
//! |--------------------|-------|--------|------------|
//! | maxMenuItems       | 10    | 100    | unlimited  |
//! | maxCategories      | 5     | 25     | unlimited  |
//! | maxImages          | 20    | 500    | unlimited  |
//! | maxStores          | 1     | 3      | unlimited  |
//! | maxCustomers       | 100   | 5000   | unlimited  |
//! | maxOrders          | 500   | 10000  | unlimited  |
//! | apiCallsPerMonth   | 0     | 10000  | unlimited  |
//! | dataRetentionDays  | 30    | 365    | unlimited  |
//!
//! Capabilities: Basic has basic analytics only; Pro adds advanced analytics,
//! custom reports, export, real-time sync, priority support; Enterprise adds
//! multi-store, AI insights, white label, custom integrations, dedicated manager.
//!
//! Entitlements are monotonic up the tier order. Changing an entitlement is a
//! data change in this file only.

use super::feature::{Entitlement, FeatureKey, Quota};
use super::tier::Tier;

use Quota::{Limited, Unlimited};

fn quota(tier: Tier, basic: u64, pro: u64) -> Entitlement {
    Entitlement::Quota(match tier {
        Tier::Basic => Limited(basic),
        Tier::Pro => Limited(pro),
        Tier::Enterprise => Unlimited,
    })
}

fn from_tier(tier: Tier, min: Tier) -> Entitlement {
    Entitlement::Capability(tier >= min)
}

/// Catalog lookup. Exhaustive over both enums.
pub fn entitlement(tier: Tier, feature: FeatureKey) -> Entitlement {
    match feature {
        FeatureKey::MaxMenuItems => quota(tier, 10, 100),
        FeatureKey::MaxCategories => quota(tier, 5, 25),
        FeatureKey::MaxImages => quota(tier, 20, 500),
        FeatureKey::MaxStores => quota(tier, 1, 3),
        FeatureKey::MaxCustomers => quota(tier, 100, 5_000),
        FeatureKey::MaxOrders => quota(tier, 500, 10_000),
        FeatureKey::ApiCallsPerMonth => quota(tier, 0, 10_000),
        FeatureKey::DataRetentionDays => quota(tier, 30, 365),

        FeatureKey::BasicAnalytics => from_tier(tier, Tier::Basic),

        FeatureKey::AdvancedAnalytics
        | FeatureKey::CustomReports
        | FeatureKey::ExportData
        | FeatureKey::RealTimeSync
        | FeatureKey::PrioritySupport => from_tier(tier, Tier::Pro),

        FeatureKey::MultiStore
        | FeatureKey::AiInsights
        | FeatureKey::WhiteLabel
        | FeatureKey::CustomIntegrations
        | FeatureKey::DedicatedManager => from_tier(tier, Tier::Enterprise),
    }
}

/// Get all features a tier has access to.
pub fn features_for_tier(tier: Tier) -> Vec<FeatureKey> {
    FeatureKey::ALL
        .into_iter()
        .filter(|f| entitlement(tier, *f).grants_access())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_menu_items_is_ten() {
        assert_eq!(
            entitlement(Tier::Basic, FeatureKey::MaxMenuItems),
            Entitlement::Quota(Limited(10))
        );
    }

    #[test]
    fn enterprise_quotas_unlimited() {
        for feature in FeatureKey::QUOTAS {
            assert_eq!(
                entitlement(Tier::Enterprise, feature),
                Entitlement::Quota(Unlimited),
                "{feature}"
            );
        }
    }

    #[test]
    fn feature_counts_per_tier() {
        // Basic: 7 non-zero quotas + basicAnalytics
        assert_eq!(features_for_tier(Tier::Basic).len(), 8);
        assert!(!features_for_tier(Tier::Basic).contains(&FeatureKey::ApiCallsPerMonth));
        // Pro: 8 quotas + 6 capabilities
        assert_eq!(features_for_tier(Tier::Pro).len(), 14);
        assert_eq!(features_for_tier(Tier::Enterprise).len(), FeatureKey::ALL.len());
    }
}
