//! Key-value backend abstraction
//!
//! The core assumes a single browser-tab-like process acting on a local,
//! synchronous, string-keyed store. The trait is the seam between the domain
//! modules and whatever actually holds the bytes; `MemoryStore` backs tests
//! and embedders that manage persistence themselves.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CoreResult;

/// A local, synchronous, string-keyed store of serialized records
///
/// Methods take `&self`; implementations use interior mutability. No
/// cross-process mutual exclusion is provided (see the top-level docs on
/// concurrent writers).
pub trait KeyValueStore {
    /// Fetch the raw value under `key`, if present
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove the value under `key`; absent keys are a successful no-op
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("token", "tok-abc").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("tok-abc"));
    }

    #[test]
    fn test_set_replaces() {
        let store = MemoryStore::new();
        store.set("token", "a").unwrap();
        store.set("token", "b").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("b"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("token", "a").unwrap();
        store.remove("token").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }
}
