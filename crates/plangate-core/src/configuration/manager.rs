//! ConfigurationManager: tier defaults, load/merge, save, reset, validate,
//! export/import. Owns an injected store; holds no global state.

use tracing::{debug, info, warn};

use crate::entitlements::{EntitlementResolver, Tier};
use crate::errors::{ConfigResult, ConfigurationError};
use crate::traits::storage::IConfigurationStore;

use super::defaults;
use super::document::{ActiveFeatureCount, Configuration};
use super::envelope::ExportEnvelope;
use super::validation::{self, ConfigViolation};

/// Per-entity configuration documents constrained by tier.
///
/// Access to a given entity id is last-write-wins; callers sharing a manager
/// across concurrent requests must serialize writes per id themselves.
pub struct ConfigurationManager<S: IConfigurationStore> {
    store: S,
    resolver: EntitlementResolver,
}

impl<S: IConfigurationStore> ConfigurationManager<S> {
    pub fn new(store: S, resolver: EntitlementResolver) -> Self {
        Self { store, resolver }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolver(&self) -> &EntitlementResolver {
        &self.resolver
    }

    /// Release the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Cumulative defaults for `tier`.
    pub fn default_config(&self, tier: Tier) -> Configuration {
        defaults::default_config(tier)
    }

    /// Stored document merged over the tier defaults, or the defaults alone.
    pub fn load_config(&self, entity_id: &str, tier: Tier) -> ConfigResult<Configuration> {
        let defaults = self.default_config(tier);
        match self.store.get(entity_id)? {
            Some(stored) => {
                debug!(entity_id, %tier, "merging stored configuration over defaults");
                Ok(defaults.merged_with(&stored))
            }
            None => {
                debug!(entity_id, %tier, "no stored configuration, using defaults");
                Ok(defaults)
            }
        }
    }

    /// Replace the stored document for `entity_id`.
    pub fn save_config(&self, entity_id: &str, config: &Configuration) -> ConfigResult<()> {
        self.store.set(entity_id, config)?;
        info!(entity_id, "configuration saved");
        Ok(())
    }

    /// Overwrite the stored document with the tier defaults and return them.
    pub fn reset_config(&self, entity_id: &str, tier: Tier) -> ConfigResult<Configuration> {
        let defaults = self.default_config(tier);
        self.store.set(entity_id, &defaults)?;
        info!(entity_id, %tier, "configuration reset to tier defaults");
        Ok(defaults)
    }

    /// False if the document uses anything above `tier`. Never mutates.
    pub fn validate_config(&self, config: &Configuration, tier: Tier) -> bool {
        let found = self.violations(config, tier);
        if !found.is_empty() {
            warn!(%tier, violations = found.len(), "configuration exceeds tier");
        }
        found.is_empty()
    }

    /// Detailed form of `validate_config`.
    pub fn violations(&self, config: &Configuration, tier: Tier) -> Vec<ConfigViolation> {
        validation::violations(config, tier, &self.resolver)
    }

    /// Serialize the stored document into an export envelope.
    /// `None` when nothing is stored for `entity_id`.
    pub fn export_config(&self, entity_id: &str) -> ConfigResult<Option<String>> {
        let Some(config) = self.store.get(entity_id)? else {
            debug!(entity_id, "nothing to export");
            return Ok(None);
        };
        ExportEnvelope::new(entity_id, config).to_json().map(Some)
    }

    /// Parse an envelope and save its document under `entity_id`.
    /// Nothing is written unless parsing succeeds and the ids match.
    pub fn try_import_config(&self, entity_id: &str, payload: &str) -> ConfigResult<()> {
        let envelope = ExportEnvelope::from_json(payload)?;
        if envelope.entity_id != entity_id {
            return Err(ConfigurationError::EntityMismatch {
                expected: entity_id.to_string(),
                found: envelope.entity_id,
            });
        }
        self.store.set(entity_id, &envelope.config)?;
        info!(
            entity_id,
            version = %envelope.version,
            exported_at = %envelope.timestamp,
            "configuration imported"
        );
        Ok(())
    }

    /// Fail-soft import: `false` on any failure, store untouched.
    pub fn import_config(&self, entity_id: &str, payload: &str) -> bool {
        match self.try_import_config(entity_id, payload) {
            Ok(()) => true,
            Err(e) => {
                warn!(entity_id, error = %e, "configuration import rejected");
                false
            }
        }
    }

    pub fn active_feature_count(&self, config: &Configuration) -> ActiveFeatureCount {
        ActiveFeatureCount::of(config)
    }
}

impl<S: IConfigurationStore + Default> Default for ConfigurationManager<S> {
    fn default() -> Self {
        Self::new(S::default(), EntitlementResolver::default())
    }
}
