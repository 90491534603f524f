//! Canonical feature keys and the values the catalog assigns to them.
//!
//! Quota features: menu items, categories, images, stores, customers, orders,
//! API calls per month, data retention days.
//! Capability features: analytics, reports, export, sync, support, multi-store,
//! AI insights, white label, integrations, dedicated manager.

use std::fmt;

use serde::{Deserialize, Serialize};

/// All 19 catalog features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    // ── Quotas (8) ─────────────────────────────────────────────
    MaxMenuItems,
    MaxCategories,
    MaxImages,
    MaxStores,
    MaxCustomers,
    MaxOrders,
    ApiCallsPerMonth,
    DataRetentionDays,

    // ── Capabilities (11) ──────────────────────────────────────
    BasicAnalytics,
    AdvancedAnalytics,
    CustomReports,
    ExportData,
    RealTimeSync,
    PrioritySupport,
    MultiStore,
    AiInsights,
    WhiteLabel,
    CustomIntegrations,
    DedicatedManager,
}

/// Whether a feature is a numeric quota or an on/off capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Quota,
    Capability,
}

impl FeatureKey {
    /// All 19 features, quotas first.
    pub const ALL: [FeatureKey; 19] = [
        Self::MaxMenuItems,
        Self::MaxCategories,
        Self::MaxImages,
        Self::MaxStores,
        Self::MaxCustomers,
        Self::MaxOrders,
        Self::ApiCallsPerMonth,
        Self::DataRetentionDays,
        Self::BasicAnalytics,
        Self::AdvancedAnalytics,
        Self::CustomReports,
        Self::ExportData,
        Self::RealTimeSync,
        Self::PrioritySupport,
        Self::MultiStore,
        Self::AiInsights,
        Self::WhiteLabel,
        Self::CustomIntegrations,
        Self::DedicatedManager,
    ];

    /// The 8 quota features, in display order.
    pub const QUOTAS: [FeatureKey; 8] = [
        Self::MaxMenuItems,
        Self::MaxCategories,
        Self::MaxImages,
        Self::MaxStores,
        Self::MaxCustomers,
        Self::MaxOrders,
        Self::ApiCallsPerMonth,
        Self::DataRetentionDays,
    ];

    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::MaxMenuItems
            | Self::MaxCategories
            | Self::MaxImages
            | Self::MaxStores
            | Self::MaxCustomers
            | Self::MaxOrders
            | Self::ApiCallsPerMonth
            | Self::DataRetentionDays => FeatureKind::Quota,

            Self::BasicAnalytics
            | Self::AdvancedAnalytics
            | Self::CustomReports
            | Self::ExportData
            | Self::RealTimeSync
            | Self::PrioritySupport
            | Self::MultiStore
            | Self::AiInsights
            | Self::WhiteLabel
            | Self::CustomIntegrations
            | Self::DedicatedManager => FeatureKind::Capability,
        }
    }

    /// Canonical key as string (for documents, logging, bindings).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxMenuItems => "maxMenuItems",
            Self::MaxCategories => "maxCategories",
            Self::MaxImages => "maxImages",
            Self::MaxStores => "maxStores",
            Self::MaxCustomers => "maxCustomers",
            Self::MaxOrders => "maxOrders",
            Self::ApiCallsPerMonth => "apiCallsPerMonth",
            Self::DataRetentionDays => "dataRetentionDays",
            Self::BasicAnalytics => "basicAnalytics",
            Self::AdvancedAnalytics => "advancedAnalytics",
            Self::CustomReports => "customReports",
            Self::ExportData => "exportData",
            Self::RealTimeSync => "realTimeSync",
            Self::PrioritySupport => "prioritySupport",
            Self::MultiStore => "multiStore",
            Self::AiInsights => "aiInsights",
            Self::WhiteLabel => "whiteLabel",
            Self::CustomIntegrations => "customIntegrations",
            Self::DedicatedManager => "dedicatedManager",
        }
    }

    /// Parse a canonical key. Aliases are handled by the normalizer, not here.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }

    /// Human-readable description for upgrade messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MaxMenuItems => "Menu items",
            Self::MaxCategories => "Menu categories",
            Self::MaxImages => "Uploaded images",
            Self::MaxStores => "Store locations",
            Self::MaxCustomers => "Customer records",
            Self::MaxOrders => "Orders per month",
            Self::ApiCallsPerMonth => "API calls per month",
            Self::DataRetentionDays => "Data retention (days)",
            Self::BasicAnalytics => "Sales and order analytics",
            Self::AdvancedAnalytics => "Advanced analytics (retention, peak hours, breakdowns)",
            Self::CustomReports => "Custom report builder",
            Self::ExportData => "Data export (CSV, JSON)",
            Self::RealTimeSync => "Real-time dashboard sync",
            Self::PrioritySupport => "Priority support",
            Self::MultiStore => "Multi-store management",
            Self::AiInsights => "AI forecasting and recommendations",
            Self::WhiteLabel => "White-label branding",
            Self::CustomIntegrations => "Custom integrations",
            Self::DedicatedManager => "Dedicated account manager",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A usage ceiling. On the wire, `-1` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Quota {
    Limited(u64),
    Unlimited,
}

impl Quota {
    pub const UNLIMITED_SENTINEL: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// A quota grants access if it is unlimited or above zero.
    pub fn grants_access(&self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(n) => *n > 0,
        }
    }

    /// Raw value with `-1` for unlimited.
    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Unlimited => Self::UNLIMITED_SENTINEL,
            Self::Limited(n) => i64::try_from(*n).unwrap_or(i64::MAX),
        }
    }

    /// Inverse of `as_raw`. Negative values other than `-1` are rejected.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            Self::UNLIMITED_SENTINEL => Some(Self::Unlimited),
            n if n >= 0 => Some(Self::Limited(n as u64)),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Quota {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| format!("invalid quota {raw}: expected -1 or >= 0"))
    }
}

impl From<Quota> for i64 {
    fn from(q: Quota) -> Self {
        q.as_raw()
    }
}

/// `Unlimited` sorts above every finite quota.
impl PartialOrd for Quota {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quota {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Self::Unlimited, Self::Unlimited) => Ordering::Equal,
            (Self::Unlimited, Self::Limited(_)) => Ordering::Greater,
            (Self::Limited(_), Self::Unlimited) => Ordering::Less,
            (Self::Limited(a), Self::Limited(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("Unlimited"),
            Self::Limited(n) => write!(f, "{n}"),
        }
    }
}

/// What a tier is granted for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entitlement {
    Capability(bool),
    Quota(Quota),
}

impl Entitlement {
    pub fn grants_access(&self) -> bool {
        match self {
            Self::Capability(enabled) => *enabled,
            Self::Quota(q) => q.grants_access(),
        }
    }

    /// Quota view: an enabled capability is unlimited, a disabled one is zero.
    pub fn as_quota(&self) -> Quota {
        match self {
            Self::Capability(true) => Quota::Unlimited,
            Self::Capability(false) => Quota::Limited(0),
            Self::Quota(q) => *q,
        }
    }
}
