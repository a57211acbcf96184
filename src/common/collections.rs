//! Hash collections used across the crate.
//!
//! Window identifiers are short strings that never come from untrusted input,
//! so the fast non-cryptographic hasher is used everywhere.

pub use std::collections::BTreeMap;

pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
