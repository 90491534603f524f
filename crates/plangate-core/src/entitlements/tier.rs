//! Subscription tiers, totally ordered Basic < Pro < Enterprise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EntitlementError;

/// Subscription tier. Declaration order is the entitlement order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Basic,
    Pro,
    Enterprise,
}

impl Tier {
    /// All tiers, ascending.
    pub const ALL: [Tier; 3] = [Self::Basic, Self::Pro, Self::Enterprise];

    /// Lowercase identifier used in config and serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Display label used in upgrade prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Tiers from `Basic` up to and including `self`.
    pub fn up_to(self) -> impl Iterator<Item = Tier> {
        Self::ALL.into_iter().filter(move |t| *t <= self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict parse: case-insensitive, surrounding whitespace ignored,
/// anything else is `UnknownTier`.
impl FromStr for Tier {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EntitlementError::UnknownTier {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_declaration() {
        assert!(Tier::Basic < Tier::Pro);
        assert!(Tier::Pro < Tier::Enterprise);
        assert_eq!(Tier::ALL.iter().max(), Some(&Tier::Enterprise));
    }

    #[test]
    fn strict_parse() {
        assert_eq!("Pro".parse::<Tier>(), Ok(Tier::Pro));
        assert_eq!(" ENTERPRISE ".parse::<Tier>(), Ok(Tier::Enterprise));
        assert_eq!(
            "gold".parse::<Tier>(),
            Err(EntitlementError::UnknownTier {
                input: "gold".to_string()
            })
        );
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn up_to_is_cumulative() {
        assert_eq!(Tier::Basic.up_to().collect::<Vec<_>>(), vec![Tier::Basic]);
        assert_eq!(
            Tier::Enterprise.up_to().collect::<Vec<_>>(),
            Tier::ALL.to_vec()
        );
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Enterprise).unwrap(), "\"enterprise\"");
        let t: Tier = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(t, Tier::Pro);
    }
}
