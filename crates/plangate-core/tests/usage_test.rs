//! Usage evaluation against tier quotas.

use plangate_core::config::EntitlementConfig;
use plangate_core::entitlements::usage::evaluate_quota;
use plangate_core::{EntitlementResolver, FeatureKey, Quota, Tier, UsageEvaluation, UsageSnapshot};

#[test]
fn basic_menu_items_at_limit_is_blocked() {
    let resolver = EntitlementResolver::default();
    let eval = resolver.evaluate_usage(Tier::Basic, "menuItems", 10);
    assert_eq!(
        eval,
        UsageEvaluation {
            allowed: false,
            remaining: 0,
            percentage: 100.0,
        }
    );
}

#[test]
fn enterprise_menu_items_is_unlimited() {
    let resolver = EntitlementResolver::default();
    let eval = resolver.evaluate_usage(Tier::Enterprise, "menuItems", 500);
    assert_eq!(
        eval,
        UsageEvaluation {
            allowed: true,
            remaining: -1,
            percentage: 0.0,
        }
    );
    assert!(eval.is_unlimited());
}

#[test]
fn one_below_limit_is_allowed() {
    let resolver = EntitlementResolver::default();
    let eval = resolver.evaluate_usage(Tier::Pro, "stores", 2);
    assert!(eval.allowed);
    assert_eq!(eval.remaining, 1);

    let eval = resolver.evaluate_usage(Tier::Pro, "stores", 3);
    assert!(!eval.allowed);
    assert_eq!(eval.remaining, 0);
}

#[test]
fn over_limit_clamps() {
    let eval = evaluate_quota(Quota::Limited(5), 12);
    assert!(!eval.allowed);
    assert_eq!(eval.remaining, 0);
    assert_eq!(eval.percentage, 100.0);
}

#[test]
fn zero_quota_never_allows() {
    let resolver = EntitlementResolver::default();
    let eval = resolver.evaluate_usage(Tier::Basic, "apiCalls", 0);
    assert!(!eval.allowed);
    assert_eq!(eval.remaining, 0);
    assert_eq!(eval.percentage, 0.0);
}

#[test]
fn capabilities_behave_as_unlimited_or_zero() {
    let resolver = EntitlementResolver::default();
    assert!(resolver
        .evaluate_usage(Tier::Pro, "exportData", 1_000)
        .is_unlimited());

    let eval = resolver.evaluate_usage(Tier::Basic, "exportData", 0);
    assert!(!eval.allowed);
    assert_eq!(eval.remaining, 0);
}

#[test]
fn percentage_is_proportional() {
    let resolver = EntitlementResolver::default();
    let eval = resolver.evaluate_usage(Tier::Basic, "orders", 125);
    assert!(eval.allowed);
    assert_eq!(eval.remaining, 375);
    assert!((eval.percentage - 25.0).abs() < f64::EPSILON);
}

// ============================================================
// Snapshots and summaries
// ============================================================

#[test]
fn snapshot_aliases_share_an_entry() {
    let mut snapshot = UsageSnapshot::new();
    snapshot.record("menuItems", 4);
    assert_eq!(snapshot.get("maxMenuItems"), 4);
    snapshot.record("maxMenuItems", 6);
    assert_eq!(snapshot.get("menuItems"), 6);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("orders"), 0);
}

#[test]
fn snapshot_deserializes_from_plain_map() {
    let snapshot: UsageSnapshot =
        serde_json::from_str(r#"{"menuItems": 3, "maxOrders": 42}"#).unwrap();
    assert_eq!(snapshot.get("maxMenuItems"), 3);
    assert_eq!(snapshot.get("orders"), 42);
}

#[test]
fn summary_keeps_raw_limit() {
    let resolver = EntitlementResolver::default();
    let snapshot: UsageSnapshot = [("categories", 2u64)].into_iter().collect();

    let summary = resolver.feature_usage_summary(Tier::Basic, "categories", &snapshot);
    assert_eq!(summary.feature, "maxCategories");
    assert_eq!(summary.current, 2);
    assert_eq!(summary.limit, Quota::Limited(5));
    assert_eq!(summary.remaining, 3);

    let summary = resolver.feature_usage_summary(Tier::Enterprise, "categories", &snapshot);
    assert_eq!(summary.limit.to_string(), "Unlimited");
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["limit"], -1);
}

#[test]
fn summaries_cover_every_quota_in_order() {
    let resolver = EntitlementResolver::default();
    let summaries = resolver.usage_summaries(Tier::Pro, &UsageSnapshot::new());
    let features: Vec<&str> = summaries.iter().map(|s| s.feature.as_str()).collect();
    let expected: Vec<&str> = FeatureKey::QUOTAS.iter().map(|f| f.as_str()).collect();
    assert_eq!(features, expected);
    assert!(summaries.iter().all(|s| s.current == 0 && s.percentage == 0.0));
}

#[test]
fn near_limit_uses_configured_threshold() {
    let snapshot: UsageSnapshot = [("menuItems", 8u64), ("orders", 100), ("stores", 1)]
        .into_iter()
        .collect();

    let resolver = EntitlementResolver::default();
    let near = resolver.features_near_limit(Tier::Basic, &snapshot);
    assert_eq!(near, vec![FeatureKey::MaxMenuItems, FeatureKey::MaxStores]);

    let strict = EntitlementResolver::new(&EntitlementConfig {
        warning_threshold_percent: Some(90.0),
        ..Default::default()
    });
    let near = strict.features_near_limit(Tier::Basic, &snapshot);
    assert_eq!(near, vec![FeatureKey::MaxStores]);

    assert!(resolver
        .features_near_limit(Tier::Enterprise, &snapshot)
        .is_empty());
}
