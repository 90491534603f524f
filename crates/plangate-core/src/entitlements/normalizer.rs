//! Maps loosely-typed caller input onto canonical tiers and feature keys.

use std::borrow::Cow;

use tracing::debug;

use super::feature::FeatureKey;
use super::tier::Tier;

/// Short aliases used at the calling boundary → canonical quota keys.
const FEATURE_ALIASES: [(&str, FeatureKey); 8] = [
    ("menuItems", FeatureKey::MaxMenuItems),
    ("categories", FeatureKey::MaxCategories),
    ("images", FeatureKey::MaxImages),
    ("stores", FeatureKey::MaxStores),
    ("customers", FeatureKey::MaxCustomers),
    ("orders", FeatureKey::MaxOrders),
    ("apiCalls", FeatureKey::ApiCallsPerMonth),
    ("dataRetention", FeatureKey::DataRetentionDays),
];

/// Case-insensitive tier match. Unrecognized or empty input is `Basic`.
///
/// Use `str::parse::<Tier>()` to tell malformed input apart from an explicit "basic".
pub fn normalize_tier(input: &str) -> Tier {
    match input.parse::<Tier>() {
        Ok(tier) => tier,
        Err(_) => {
            debug!(input, "unrecognized tier, falling back to basic");
            Tier::Basic
        }
    }
}

/// Alias → canonical key. Unknown input passes through unchanged.
pub fn normalize_feature_key(alias: &str) -> Cow<'_, str> {
    FEATURE_ALIASES
        .iter()
        .find(|(a, _)| *a == alias)
        .map(|(_, f)| Cow::Borrowed(f.as_str()))
        .unwrap_or(Cow::Borrowed(alias))
}

/// Normalize then parse. `None` means the key is not in the catalog.
pub fn resolve_feature(input: &str) -> Option<FeatureKey> {
    FeatureKey::parse(&normalize_feature_key(input))
}
