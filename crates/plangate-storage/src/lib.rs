//! # plangate-storage
//!
//! SQLite persistence for configuration documents.
//! One row per entity id, whole-document upsert, schema tracked with
//! `PRAGMA user_version`.

pub mod connection;
pub mod migrations;
pub mod store;

pub use store::SqliteConfigurationStore;
