//! Versioned export envelope for configuration documents.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigResult, ConfigurationError};

use super::document::Configuration;

pub const ENVELOPE_VERSION: &str = "1.0";

/// `{ "version", "timestamp", "entityId", "config" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    /// ISO-8601 UTC, millisecond precision.
    #[serde(default)]
    pub timestamp: String,
    pub entity_id: String,
    pub config: Configuration,
}

fn default_version() -> String {
    ENVELOPE_VERSION.to_string()
}

impl ExportEnvelope {
    /// Wrap `config` for `entity_id`, stamped with the current time.
    pub fn new(entity_id: &str, config: Configuration) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            entity_id: entity_id.to_string(),
            config,
        }
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an envelope. Any JSON or shape error is `MalformedEnvelope`.
    pub fn from_json(payload: &str) -> ConfigResult<Self> {
        serde_json::from_str(payload).map_err(|e| ConfigurationError::MalformedEnvelope {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names() {
        let envelope = ExportEnvelope::new("store-9", Configuration::new());
        let json: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["entityId"], "store-9");
        assert!(json["config"].is_object());
        let ts = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn missing_config_is_malformed() {
        let err = ExportEnvelope::from_json(r#"{"version":"1.0","entityId":"x"}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedEnvelope { .. }));
    }

    #[test]
    fn version_and_timestamp_optional() {
        let envelope = ExportEnvelope::from_json(r#"{"entityId":"x","config":{}}"#).unwrap();
        assert_eq!(envelope.version, ENVELOPE_VERSION);
        assert!(envelope.timestamp.is_empty());
    }
}
