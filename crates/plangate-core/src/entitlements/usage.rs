//! Usage evaluation: quota + caller-supplied current usage → allowed / remaining / percentage.
//!
//! The engine never records usage itself; every call takes the caller's
//! current count or a `UsageSnapshot`.

use serde::{Deserialize, Serialize};

use crate::types::FxHashMap;

use super::feature::{FeatureKey, Quota};
use super::normalizer::normalize_feature_key;
use super::resolver::EntitlementResolver;
use super::tier::Tier;

/// Outcome of comparing current usage against a quota.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageEvaluation {
    pub allowed: bool,
    /// Units left before the limit; `-1` when unlimited.
    pub remaining: i64,
    /// `0..=100`; always 0 when unlimited.
    pub percentage: f64,
}

impl UsageEvaluation {
    pub fn is_unlimited(&self) -> bool {
        self.remaining == Quota::UNLIMITED_SENTINEL
    }

    pub fn is_near_limit(&self, threshold_percent: f64) -> bool {
        !self.is_unlimited() && self.percentage >= threshold_percent
    }
}

/// Pure evaluation of one quota. `current == limit` is not allowed.
pub fn evaluate_quota(quota: Quota, current: u64) -> UsageEvaluation {
    match quota {
        Quota::Unlimited => UsageEvaluation {
            allowed: true,
            remaining: Quota::UNLIMITED_SENTINEL,
            percentage: 0.0,
        },
        Quota::Limited(limit) => {
            let remaining = i64::try_from(limit.saturating_sub(current)).unwrap_or(i64::MAX);
            let percentage = if limit > 0 {
                (current as f64 / limit as f64 * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            UsageEvaluation {
                allowed: current < limit,
                remaining,
                percentage,
            }
        }
    }
}

/// Caller-supplied consumption counts, keyed by canonical feature key.
/// Alias and canonical spellings address the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FxHashMap<String, u64>", into = "FxHashMap<String, u64>")]
pub struct UsageSnapshot {
    counts: FxHashMap<String, u64>,
}

impl UsageSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current count for a feature, replacing any previous value.
    pub fn record(&mut self, feature: &str, count: u64) -> &mut Self {
        self.counts
            .insert(normalize_feature_key(feature).into_owned(), count);
        self
    }

    /// Current count; features not in the snapshot count as zero.
    pub fn get(&self, feature: &str) -> u64 {
        self.counts
            .get(normalize_feature_key(feature).as_ref())
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for UsageSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (k, v) in iter {
            snapshot.record(k.as_ref(), v);
        }
        snapshot
    }
}

impl From<FxHashMap<String, u64>> for UsageSnapshot {
    fn from(map: FxHashMap<String, u64>) -> Self {
        map.into_iter().collect()
    }
}

impl From<UsageSnapshot> for FxHashMap<String, u64> {
    fn from(snapshot: UsageSnapshot) -> Self {
        snapshot.counts
    }
}

/// Current vs limit for one feature, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureUsageSummary {
    pub feature: String,
    pub current: u64,
    /// Raw limit; serializes as `-1` when unlimited, displays as "Unlimited".
    pub limit: Quota,
    pub remaining: i64,
    pub percentage: f64,
}

impl EntitlementResolver {
    /// Evaluate `current` against the tier's limit for `feature`.
    /// Enabled capabilities behave as unlimited, disabled ones as a zero quota.
    pub fn evaluate_usage(&self, tier: Tier, feature: &str, current: u64) -> UsageEvaluation {
        evaluate_quota(self.effective(tier, feature).as_quota(), current)
    }

    pub fn feature_usage_summary(
        &self,
        tier: Tier,
        feature: &str,
        snapshot: &UsageSnapshot,
    ) -> FeatureUsageSummary {
        let limit = self.effective(tier, feature).as_quota();
        let current = snapshot.get(feature);
        let eval = evaluate_quota(limit, current);
        FeatureUsageSummary {
            feature: normalize_feature_key(feature).into_owned(),
            current,
            limit,
            remaining: eval.remaining,
            percentage: eval.percentage,
        }
    }

    /// One summary per quota feature, in catalog order.
    pub fn usage_summaries(&self, tier: Tier, snapshot: &UsageSnapshot) -> Vec<FeatureUsageSummary> {
        FeatureKey::QUOTAS
            .iter()
            .map(|f| self.feature_usage_summary(tier, f.as_str(), snapshot))
            .collect()
    }

    /// Quota features at or above the configured warning threshold.
    pub fn features_near_limit(&self, tier: Tier, snapshot: &UsageSnapshot) -> Vec<FeatureKey> {
        FeatureKey::QUOTAS
            .into_iter()
            .filter(|f| {
                self.evaluate_usage(tier, f.as_str(), snapshot.get(f.as_str()))
                    .is_near_limit(self.warning_threshold())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_never_allowed() {
        let eval = evaluate_quota(Quota::Limited(0), 0);
        assert!(!eval.allowed);
        assert_eq!(eval.remaining, 0);
        assert_eq!(eval.percentage, 0.0);
    }

    #[test]
    fn over_limit_clamps() {
        let eval = evaluate_quota(Quota::Limited(10), 25);
        assert!(!eval.allowed);
        assert_eq!(eval.remaining, 0);
        assert_eq!(eval.percentage, 100.0);
    }

    #[test]
    fn snapshot_aliases_share_a_slot() {
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
            serde_json::from_str(r#"{"menuItems": 3, "maxImages": 7}"#).unwrap();
        assert_eq!(snapshot.get("maxMenuItems"), 3);
        assert_eq!(snapshot.get("images"), 7);
    }
}
