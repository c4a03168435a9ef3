//! In-memory store adapter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use cart_types::{CartStore, StoreError};

/// In-memory key-value store.
///
/// Clones share the same underlying map, so two cart instances built over
/// clones of one `MemoryStore` see each other's writes - the shape the
/// persistence round-trip tests need.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_overwrite() {
        let store = MemoryStore::new();
        store.set("cart", "old").unwrap();
        store.set("cart", "new").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_clones_share_state() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("cart", "shared").unwrap();
        assert_eq!(b.get("cart").unwrap().as_deref(), Some("shared"));
    }
}
