pub mod collections;

pub use collections::FxHashMap;
