use std::collections::HashMap;

use super::{KeyValueStore, StorageError, StorageResult};

/// In-memory backend with an optional byte quota
///
/// The quota counts key and value bytes across all entries, like the per-origin
/// limit browsers apply to local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes pushing total usage past `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        Self { items: HashMap::new(), quota: Some(quota) }
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(quota) = self.quota {
            let replaced = self.items.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_string(), needed, quota });
            }
        }

        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("cartCount").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set_item("cartCount", "4").unwrap();
        assert_eq!(store.get_item("cartCount").unwrap().as_deref(), Some("4"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let mut store = MemoryStore::new();
        store.set_item("cartCount", "1").unwrap();
        store.set_item("cartCount", "2").unwrap();
        assert_eq!(store.get_item("cartCount").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_quota_exceeded() {
        let mut store = MemoryStore::with_quota(12);
        let result = store.set_item("searchHistory", "[\"a\"]");
        assert!(matches!(result, Err(StorageError::QuotaExceeded { quota: 12, .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_quota_accounts_for_replaced_value() {
        // "cartCount" (9 bytes) + "10" (2 bytes) fits exactly once, repeatedly
        let mut store = MemoryStore::with_quota(11);
        store.set_item("cartCount", "1").unwrap();
        store.set_item("cartCount", "10").unwrap();
        assert_eq!(store.used_bytes(), 11);
        assert!(store.set_item("cartCount", "100").is_err());
        assert_eq!(store.get_item("cartCount").unwrap().as_deref(), Some("10"));
    }
}
