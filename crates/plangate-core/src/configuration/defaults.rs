//! Tier increments: what each tier adds to the default configuration.
//!
//! `default_config(tier)` folds the increments of every tier up to and
//! including `tier`, in ascending order. Increments only add keys or extend
//! choice options, so each tier's default is a superset of the one below.
//! A gated entry's tier must equal the catalog's minimum tier for the
//! capability it names.

use crate::entitlements::{FeatureKey, Tier};

use super::document::{Configuration, SettingValue, CHARTS, KPI_CARDS, SETTINGS, WIDGETS};

/// One entry of a tier's increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// New boolean setting.
    Toggle {
        section: &'static str,
        key: &'static str,
        default: bool,
        requires: Option<FeatureKey>,
    },
    /// New enum setting with its default and initial options.
    Choice {
        section: &'static str,
        key: &'static str,
        default: &'static str,
        options: &'static [&'static str],
        requires: Option<FeatureKey>,
    },
    /// Extra options for an existing choice.
    Options {
        section: &'static str,
        key: &'static str,
        options: &'static [&'static str],
    },
}

impl Increment {
    pub fn section(&self) -> &'static str {
        match self {
            Self::Toggle { section, .. }
            | Self::Choice { section, .. }
            | Self::Options { section, .. } => *section,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Toggle { key, .. } | Self::Choice { key, .. } | Self::Options { key, .. } => *key,
        }
    }

    pub fn requires(&self) -> Option<FeatureKey> {
        match self {
            Self::Toggle { requires, .. } | Self::Choice { requires, .. } => *requires,
            Self::Options { .. } => None,
        }
    }
}

const fn toggle(section: &'static str, key: &'static str, default: bool) -> Increment {
    Increment::Toggle {
        section,
        key,
        default,
        requires: None,
    }
}

const fn gated(
    section: &'static str,
    key: &'static str,
    default: bool,
    feature: FeatureKey,
) -> Increment {
    Increment::Toggle {
        section,
        key,
        default,
        requires: Some(feature),
    }
}

const BASIC: &[Increment] = &[
    toggle(KPI_CARDS, "totalOrders", true),
    toggle(KPI_CARDS, "revenue", true),
    toggle(KPI_CARDS, "averageOrderValue", true),
    toggle(KPI_CARDS, "newCustomers", false),
    toggle(CHARTS, "salesTrend", true),
    toggle(CHARTS, "orderVolume", true),
    toggle(WIDGETS, "recentOrders", true),
    toggle(WIDGETS, "quickActions", true),
    toggle(WIDGETS, "menuPerformance", false),
    toggle(SETTINGS, "showTrends", true),
    Increment::Choice {
        section: SETTINGS,
        key: "refreshInterval",
        default: "15m",
        options: &["15m", "30m", "60m"],
        requires: None,
    },
    Increment::Choice {
        section: SETTINGS,
        key: "dateRange",
        default: "7d",
        options: &["7d", "30d"],
        requires: None,
    },
    Increment::Choice {
        section: SETTINGS,
        key: "theme",
        default: "light",
        options: &["light", "dark"],
        requires: None,
    },
];

const PRO: &[Increment] = &[
    gated(KPI_CARDS, "customerRetention", true, FeatureKey::AdvancedAnalytics),
    gated(KPI_CARDS, "topSellingItems", true, FeatureKey::AdvancedAnalytics),
    gated(CHARTS, "categoryBreakdown", true, FeatureKey::AdvancedAnalytics),
    gated(CHARTS, "peakHours", true, FeatureKey::AdvancedAnalytics),
    gated(CHARTS, "customReport", false, FeatureKey::CustomReports),
    gated(WIDGETS, "inventoryAlerts", true, FeatureKey::RealTimeSync),
    gated(WIDGETS, "customerFeedback", true, FeatureKey::AdvancedAnalytics),
    gated(SETTINGS, "showComparisons", true, FeatureKey::AdvancedAnalytics),
    gated(SETTINGS, "exportEnabled", true, FeatureKey::ExportData),
    Increment::Choice {
        section: SETTINGS,
        key: "reportSchedule",
        default: "weekly",
        options: &["weekly", "monthly"],
        requires: Some(FeatureKey::CustomReports),
    },
    Increment::Options {
        section: SETTINGS,
        key: "refreshInterval",
        options: &["5m"],
    },
    Increment::Options {
        section: SETTINGS,
        key: "dateRange",
        options: &["90d"],
    },
];

const ENTERPRISE: &[Increment] = &[
    gated(KPI_CARDS, "forecastAccuracy", true, FeatureKey::AiInsights),
    gated(KPI_CARDS, "storeComparison", true, FeatureKey::MultiStore),
    gated(CHARTS, "predictiveSales", true, FeatureKey::AiInsights),
    gated(CHARTS, "multiStoreComparison", true, FeatureKey::MultiStore),
    gated(WIDGETS, "aiRecommendations", true, FeatureKey::AiInsights),
    gated(WIDGETS, "customWidgets", false, FeatureKey::CustomIntegrations),
    gated(SETTINGS, "whiteLabelBranding", true, FeatureKey::WhiteLabel),
    Increment::Options {
        section: SETTINGS,
        key: "refreshInterval",
        options: &["realtime"],
    },
    Increment::Options {
        section: SETTINGS,
        key: "dateRange",
        options: &["365d", "custom"],
    },
    Increment::Options {
        section: SETTINGS,
        key: "reportSchedule",
        options: &["daily"],
    },
    Increment::Options {
        section: SETTINGS,
        key: "theme",
        options: &["custom"],
    },
];

/// Increments in ascending tier order.
pub static TIER_INCREMENTS: [(Tier, &[Increment]); 3] = [
    (Tier::Basic, BASIC),
    (Tier::Pro, PRO),
    (Tier::Enterprise, ENTERPRISE),
];

/// The increment a single tier contributes.
pub fn increments(tier: Tier) -> &'static [Increment] {
    TIER_INCREMENTS
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|(_, inc)| *inc)
        .unwrap_or(&[])
}

/// Every increment up to and including `tier`, tagged with its tier.
fn cumulative(tier: Tier) -> impl Iterator<Item = (Tier, &'static Increment)> {
    TIER_INCREMENTS
        .iter()
        .filter(move |(t, _)| *t <= tier)
        .flat_map(|&(t, inc)| inc.iter().map(move |i| (t, i)))
}

/// Build the default document for `tier`.
pub fn default_config(tier: Tier) -> Configuration {
    let mut config = Configuration::new();
    for (_, increment) in cumulative(tier) {
        match increment {
            Increment::Toggle {
                section,
                key,
                default,
                ..
            } => config.set(section, key, SettingValue::Toggle(*default)),
            Increment::Choice {
                section,
                key,
                default,
                ..
            } => config.set(section, key, SettingValue::Choice((*default).to_string())),
            Increment::Options { .. } => {}
        }
    }
    config
}

/// Shape of a known setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Toggle,
    Choice,
}

/// Where a known setting is introduced and what it is gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub introduced: Tier,
    pub kind: SettingKind,
    pub requires: Option<FeatureKey>,
}

/// Look up a setting defined anywhere in the increments table.
pub fn setting_spec(section: &str, key: &str) -> Option<SettingSpec> {
    cumulative(Tier::Enterprise).find_map(|(tier, inc)| {
        if inc.section() != section || inc.key() != key {
            return None;
        }
        let kind = match inc {
            Increment::Toggle { .. } => SettingKind::Toggle,
            Increment::Choice { .. } => SettingKind::Choice,
            Increment::Options { .. } => return None,
        };
        Some(SettingSpec {
            introduced: tier,
            kind,
            requires: inc.requires(),
        })
    })
}

/// Options a choice accepts at `tier`. Empty for unknown or toggle keys.
pub fn allowed_options(section: &str, key: &str, tier: Tier) -> Vec<&'static str> {
    cumulative(tier)
        .filter(|(_, inc)| inc.section() == section && inc.key() == key)
        .filter_map(|(_, inc)| match inc {
            Increment::Choice { options, .. } | Increment::Options { options, .. } => {
                Some(*options)
            }
            Increment::Toggle { .. } => None,
        })
        .flatten()
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_defaults_have_all_sections() {
        let config = default_config(Tier::Basic);
        for section in [KPI_CARDS, CHARTS, WIDGETS, SETTINGS] {
            assert!(config.section(section).is_some(), "missing {section}");
        }
        assert_eq!(
            config.get(SETTINGS, "refreshInterval"),
            Some(&SettingValue::Choice("15m".to_string()))
        );
        assert!(config.get(KPI_CARDS, "customerRetention").is_none());
    }

    #[test]
    fn options_accumulate_by_tier() {
        assert_eq!(
            allowed_options(SETTINGS, "dateRange", Tier::Basic),
            vec!["7d", "30d"]
        );
        assert_eq!(
            allowed_options(SETTINGS, "dateRange", Tier::Enterprise),
            vec!["7d", "30d", "90d", "365d", "custom"]
        );
        assert!(allowed_options(SETTINGS, "reportSchedule", Tier::Basic).is_empty());
        assert!(allowed_options(KPI_CARDS, "revenue", Tier::Enterprise).is_empty());
    }

    #[test]
    fn spec_lookup() {
        let spec = setting_spec(WIDGETS, "aiRecommendations").unwrap();
        assert_eq!(spec.introduced, Tier::Enterprise);
        assert_eq!(spec.kind, SettingKind::Toggle);
        assert_eq!(spec.requires, Some(FeatureKey::AiInsights));

        let spec = setting_spec(SETTINGS, "reportSchedule").unwrap();
        assert_eq!(spec.introduced, Tier::Pro);
        assert_eq!(spec.kind, SettingKind::Choice);

        assert!(setting_spec(SETTINGS, "nonexistent").is_none());
    }

    #[test]
    fn every_choice_default_is_an_option() {
        for (tier, incs) in TIER_INCREMENTS {
            for inc in incs {
                if let Increment::Choice { default, options, .. } = inc {
                    assert!(options.contains(default), "{tier}: {}", inc.key());
                }
            }
        }
    }

    #[test]
    fn options_extend_known_choices() {
        for (tier, incs) in TIER_INCREMENTS {
            for inc in incs {
                if let Increment::Options { section, key, .. } = inc {
                    let spec = setting_spec(section, key).expect("options for unknown choice");
                    assert_eq!(spec.kind, SettingKind::Choice);
                    assert!(spec.introduced <= tier);
                }
            }
        }
    }
}
