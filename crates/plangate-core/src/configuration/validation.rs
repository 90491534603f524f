//! Tier validation of configuration documents.
//!
//! Detects documents that use settings above their tier, typically left over
//! after a downgrade. Reports only; remediation is the caller's decision.

use std::fmt;

use crate::entitlements::{EntitlementResolver, Tier};

use super::defaults::{allowed_options, setting_spec, SettingKind};
use super::document::{Configuration, SettingValue};

/// One reason a document is not valid for a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    /// A toggle gated above the tier is switched on.
    GatedToggleEnabled {
        section: String,
        key: String,
        required_tier: Tier,
    },
    /// A choice introduced above the tier is present.
    GatedChoicePresent {
        section: String,
        key: String,
        required_tier: Tier,
    },
    /// A choice holds a value the tier does not offer.
    OptionNotAllowed {
        section: String,
        key: String,
        value: String,
        allowed: Vec<String>,
    },
    /// A known setting holds the wrong kind of value.
    KindMismatch {
        section: String,
        key: String,
        expected: SettingKind,
    },
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GatedToggleEnabled {
                section,
                key,
                required_tier,
            } => write!(f, "{section}.{key} is enabled but requires {required_tier}"),
            Self::GatedChoicePresent {
                section,
                key,
                required_tier,
            } => write!(f, "{section}.{key} is set but requires {required_tier}"),
            Self::OptionNotAllowed {
                section,
                key,
                value,
                allowed,
            } => write!(
                f,
                "{section}.{key} = '{value}' is not one of [{}]",
                allowed.join(", ")
            ),
            Self::KindMismatch {
                section,
                key,
                expected,
            } => write!(f, "{section}.{key} should be a {expected:?} value"),
        }
    }
}

/// Every violation of `config` against `tier`. Unknown keys are ignored.
///
/// A gated setting's required tier is the later of the tier that introduced
/// it and the catalog's minimum tier for the capability it names.
pub fn violations(
    config: &Configuration,
    tier: Tier,
    resolver: &EntitlementResolver,
) -> Vec<ConfigViolation> {
    let mut found = Vec::new();

    for (section, key, value) in config.entries() {
        let Some(spec) = setting_spec(section, key) else {
            continue;
        };
        let required_tier = spec
            .requires
            .map(|f| resolver.minimum_tier_for_key(f).max(spec.introduced))
            .unwrap_or(spec.introduced);
        let gated = required_tier > tier;

        match (spec.kind, value) {
            (SettingKind::Toggle, SettingValue::Toggle(enabled)) => {
                if gated && *enabled {
                    found.push(ConfigViolation::GatedToggleEnabled {
                        section: section.to_string(),
                        key: key.to_string(),
                        required_tier,
                    });
                }
            }
            (SettingKind::Choice, SettingValue::Choice(choice)) => {
                if gated {
                    found.push(ConfigViolation::GatedChoicePresent {
                        section: section.to_string(),
                        key: key.to_string(),
                        required_tier,
                    });
                    continue;
                }
                let allowed = allowed_options(section, key, tier);
                if !allowed.iter().any(|o| *o == choice.as_str()) {
                    found.push(ConfigViolation::OptionNotAllowed {
                        section: section.to_string(),
                        key: key.to_string(),
                        value: choice.clone(),
                        allowed: allowed.into_iter().map(str::to_string).collect(),
                    });
                }
            }
            (expected, _) => found.push(ConfigViolation::KindMismatch {
                section: section.to_string(),
                key: key.to_string(),
                expected,
            }),
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::defaults::default_config;
    use crate::configuration::document::{CHARTS, SETTINGS};

    #[test]
    fn defaults_have_no_violations() {
        let resolver = EntitlementResolver::default();
        for tier in Tier::ALL {
            let v = violations(&default_config(tier), tier, &resolver);
            assert!(v.is_empty(), "{tier}: {v:?}");
        }
    }

    #[test]
    fn disabled_gated_toggle_is_fine() {
        let resolver = EntitlementResolver::default();
        let mut config = default_config(Tier::Basic);
        config.set(CHARTS, "predictiveSales", false);
        assert!(violations(&config, Tier::Basic, &resolver).is_empty());
    }

    #[test]
    fn option_outside_tier() {
        let resolver = EntitlementResolver::default();
        let mut config = default_config(Tier::Basic);
        config.set(SETTINGS, "dateRange", "365d");
        let v = violations(&config, Tier::Basic, &resolver);
        assert_eq!(v.len(), 1);
        assert!(matches!(&v[0], ConfigViolation::OptionNotAllowed { value, .. } if value == "365d"));
        assert!(violations(&config, Tier::Enterprise, &resolver).is_empty());
    }

    #[test]
    fn kind_mismatch_reported() {
        let resolver = EntitlementResolver::default();
        let mut config = default_config(Tier::Pro);
        config.set(SETTINGS, "theme", true);
        let v = violations(&config, Tier::Pro, &resolver);
        assert_eq!(
            v,
            vec![ConfigViolation::KindMismatch {
                section: SETTINGS.to_string(),
                key: "theme".to_string(),
                expected: SettingKind::Choice,
            }]
        );
        assert!(v[0].to_string().contains("settings.theme"));
    }
}
