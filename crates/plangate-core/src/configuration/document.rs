//! Configuration documents: named sections of toggle / choice settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const KPI_CARDS: &str = "kpiCards";
pub const CHARTS: &str = "charts";
pub const WIDGETS: &str = "widgets";
pub const SETTINGS: &str = "settings";

/// One setting: an on/off toggle or an enum-like choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Toggle(bool),
    Choice(String),
}

impl SettingValue {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Toggle(true))
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Toggle(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::Choice(v.to_string())
    }
}

pub type Section = BTreeMap<String, SettingValue>;

/// A per-entity configuration document.
///
/// Serializes as the bare nested object, e.g.
/// `{"kpiCards": {"revenue": true}, "settings": {"dateRange": "7d"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    sections: BTreeMap<String, Section>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&SettingValue> {
        self.sections.get(section)?.get(key)
    }

    /// Insert or replace one setting, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<SettingValue>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Flip a toggle. Returns the new state, or `None` if the key is absent
    /// or not a toggle.
    pub fn toggle(&mut self, section: &str, key: &str) -> Option<bool> {
        match self.sections.get_mut(section)?.get_mut(key)? {
            SettingValue::Toggle(enabled) => {
                *enabled = !*enabled;
                Some(*enabled)
            }
            SettingValue::Choice(_) => None,
        }
    }

    /// Every (section, key, value) triple in deterministic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &SettingValue)> {
        self.sections.iter().flat_map(|(section, values)| {
            values
                .iter()
                .map(move |(key, value)| (section.as_str(), key.as_str(), value))
        })
    }

    /// True if every setting in `other` is present here with the same value.
    pub fn contains_all(&self, other: &Configuration) -> bool {
        other
            .entries()
            .all(|(section, key, value)| self.get(section, key) == Some(value))
    }

    /// Layer `overlay` on top of `self`, key by key. Keys and sections only
    /// in `overlay` are kept.
    pub fn merged_with(&self, overlay: &Configuration) -> Configuration {
        let mut merged = self.clone();
        for (section, values) in &overlay.sections {
            let target = merged.sections.entry(section.clone()).or_default();
            for (key, value) in values {
                target.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|s| s.is_empty())
    }
}

/// Count of enabled toggles, per section and overall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFeatureCount {
    pub by_section: BTreeMap<String, usize>,
    pub total: usize,
}

impl ActiveFeatureCount {
    pub fn of(config: &Configuration) -> Self {
        let by_section: BTreeMap<String, usize> = config
            .sections()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.values().filter(|v| v.is_enabled()).count(),
                )
            })
            .collect();
        let total = by_section.values().sum();
        Self { by_section, total }
    }

    pub fn section(&self, name: &str) -> usize {
        self.by_section.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_bare_sections() {
        let mut config = Configuration::new();
        config.set(KPI_CARDS, "revenue", true);
        config.set(SETTINGS, "dateRange", "7d");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kpiCards": {"revenue": true}, "settings": {"dateRange": "7d"}})
        );

        let back: Configuration = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn toggle_flips_only_toggles() {
        let mut config = Configuration::new();
        config.set(CHARTS, "salesTrend", true);
        config.set(SETTINGS, "theme", "dark");

        assert_eq!(config.toggle(CHARTS, "salesTrend"), Some(false));
        assert_eq!(config.toggle(CHARTS, "salesTrend"), Some(true));
        assert_eq!(config.toggle(SETTINGS, "theme"), None);
        assert_eq!(config.toggle(WIDGETS, "missing"), None);
    }

    #[test]
    fn merge_keeps_overlay_only_keys() {
        let mut base = Configuration::new();
        base.set(CHARTS, "salesTrend", true);
        base.set(CHARTS, "orderVolume", true);

        let mut overlay = Configuration::new();
        overlay.set(CHARTS, "orderVolume", false);
        overlay.set(CHARTS, "legacyChart", true);

        let merged = base.merged_with(&overlay);
        assert_eq!(merged.get(CHARTS, "salesTrend"), Some(&SettingValue::Toggle(true)));
        assert_eq!(merged.get(CHARTS, "orderVolume"), Some(&SettingValue::Toggle(false)));
        assert_eq!(merged.get(CHARTS, "legacyChart"), Some(&SettingValue::Toggle(true)));
    }

    #[test]
    fn active_count_ignores_choices_and_false() {
        let mut config = Configuration::new();
        config.set(KPI_CARDS, "revenue", true);
        config.set(KPI_CARDS, "totalOrders", true);
        config.set(KPI_CARDS, "newCustomers", false);
        config.set(SETTINGS, "theme", "light");

        let counts = ActiveFeatureCount::of(&config);
        assert_eq!(counts.section(KPI_CARDS), 2);
        assert_eq!(counts.section(SETTINGS), 0);
        assert_eq!(counts.total, 2);
    }
}
