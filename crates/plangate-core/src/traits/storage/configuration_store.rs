//! `IConfigurationStore` trait: entity id → configuration document.

use std::sync::Arc;

use crate::configuration::Configuration;
use crate::errors::StorageError;

/// Whole-document key-value store for configuration documents.
///
/// `set` replaces any prior document for the id (last write wins). The
/// store provides no atomicity beyond that and no cross-call locking.
pub trait IConfigurationStore: Send + Sync {
    /// Read the document stored for `entity_id`, if any.
    fn get(&self, entity_id: &str) -> Result<Option<Configuration>, StorageError>;

    /// Replace the document stored for `entity_id`.
    fn set(&self, entity_id: &str, config: &Configuration) -> Result<(), StorageError>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: IConfigurationStore + ?Sized> IConfigurationStore for Arc<T> {
    fn get(&self, entity_id: &str) -> Result<Option<Configuration>, StorageError> {
        (**self).get(entity_id)
    }
    fn set(&self, entity_id: &str, config: &Configuration) -> Result<(), StorageError> {
        (**self).set(entity_id, config)
    }
}
