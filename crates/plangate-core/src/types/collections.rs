//! Hash collections used across the engine.
//! Keys are short, trusted strings, so FxHash is preferred over SipHash.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
