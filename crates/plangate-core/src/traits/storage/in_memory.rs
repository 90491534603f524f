//! In-memory `IConfigurationStore`.

use std::sync::RwLock;

use crate::configuration::Configuration;
use crate::errors::StorageError;
use crate::types::FxHashMap;

use super::IConfigurationStore;

/// Process-local store. Documents are cloned in and out, so callers never
/// share a mutable document with the store.
#[derive(Debug, Default)]
pub struct InMemoryConfigurationStore {
    documents: RwLock<FxHashMap<String, Configuration>>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete the document for `entity_id`. Returns whether one existed.
    pub fn remove(&self, entity_id: &str) -> Result<bool, StorageError> {
        let mut docs = self
            .documents
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(docs.remove(entity_id).is_some())
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IConfigurationStore for InMemoryConfigurationStore {
    fn get(&self, entity_id: &str) -> Result<Option<Configuration>, StorageError> {
        let docs = self
            .documents
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(docs.get(entity_id).cloned())
    }

    fn set(&self, entity_id: &str, config: &Configuration) -> Result<(), StorageError> {
        let mut docs = self
            .documents
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        docs.insert(entity_id.to_string(), config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::SettingValue;

    #[test]
    fn set_replaces_whole_document() {
        let store = InMemoryConfigurationStore::new();
        let mut first = Configuration::new();
        first.set("kpiCards", "revenue", SettingValue::Toggle(true));
        first.set("charts", "salesTrend", SettingValue::Toggle(true));
        store.set("store-1", &first).unwrap();

        let mut second = Configuration::new();
        second.set("kpiCards", "revenue", SettingValue::Toggle(false));
        store.set("store-1", &second).unwrap();

        let loaded = store.get("store-1").unwrap().unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.section("charts").is_none());
    }

    #[test]
    fn remove_and_missing() {
        let store = InMemoryConfigurationStore::new();
        assert!(store.get("nobody").unwrap().is_none());
        store.set("a", &Configuration::new()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert!(store.is_empty());
    }
}
