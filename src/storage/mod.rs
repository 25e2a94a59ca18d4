//! Storage layer for fintrack-core
//!
//! A small synchronous key-value abstraction plus two implementations: an
//! in-memory map and a single-file JSON store with atomic writes. Domain
//! modules serialize whole records through the typed helpers here rather
//! than touching raw strings themselves.

pub mod file;
pub mod keys;
pub mod kv;

pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CoreError, CoreResult};

/// Read and deserialize the record under `key`
///
/// Missing keys are `Ok(None)`; a present but unparseable value is
/// `CoreError::CorruptState` and recovery is the caller's policy.
pub fn read_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> CoreResult<Option<T>> {
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| CoreError::CorruptState(format!("key '{}': {}", key, e))),
    }
}

/// Serialize and store a record under `key`
pub fn write_record<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    record: &T,
) -> CoreResult<()> {
    let raw = serde_json::to_string(record)?;
    store.set(key, &raw)
}
