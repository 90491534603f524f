//! Shared traits used across plangate crates.

pub mod storage;

pub use storage::{IConfigurationStore, InMemoryConfigurationStore};
