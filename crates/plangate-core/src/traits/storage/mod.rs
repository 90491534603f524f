//! Storage trait module.
//!
//! `IConfigurationStore` is the contract between the configuration manager
//! and whatever keeps documents between calls. The SQLite implementation
//! lives in `plangate-storage`; an in-memory one lives here for tests and
//! embedders that do not need durability.

pub mod configuration_store;
pub mod in_memory;

pub use configuration_store::IConfigurationStore;
pub use in_memory::InMemoryConfigurationStore;
