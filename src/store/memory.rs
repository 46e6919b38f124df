//! In-Memory Store Backend
//!
//! HashMap-backed implementation of the `KeyValueStore` trait. Every trait
//! operation runs under a single RwLock acquisition, so the conditional
//! writes are atomic with respect to concurrent requests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{KeyValueStore, StoreResult, MATCH_ALL};

// == Memory Store ==
/// Thread-safe in-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new, empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(true)
    }

    async fn set_if_present(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn delete_many(&self, keys: &[String]) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().await;
        // The gateway only ever issues "*"; anything else is an exact match.
        let keys = if pattern == MATCH_ALL {
            entries.keys().cloned().collect()
        } else {
            entries
                .keys()
                .filter(|k| k.as_str() == pattern)
                .cloned()
                .collect()
        };
        Ok(keys)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_new() {
        let store = MemoryStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_set_and_get() {
        let store = MemoryStore::new();

        store.set("key1", "value1").await.unwrap();
        let value = store.get("key1").await.unwrap();

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_get_nonexistent() {
        let store = MemoryStore::new();

        let value = store.get("nonexistent").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_store_exists() {
        let store = MemoryStore::new();

        store.set("key1", "value1").await.unwrap();

        assert!(store.exists("key1").await.unwrap());
        assert!(!store.exists("key2").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_set_overwrites() {
        let store = MemoryStore::new();

        store.set("key1", "value1").await.unwrap();
        store.set("key1", "value2").await.unwrap();

        assert_eq!(store.get("key1").await.unwrap().as_deref(), Some("value2"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_set_if_absent() {
        let store = MemoryStore::new();

        assert!(store.set_if_absent("key1", "value1").await.unwrap());
        assert!(!store.set_if_absent("key1", "value2").await.unwrap());

        // Losing write must not change the stored value
        assert_eq!(store.get("key1").await.unwrap().as_deref(), Some("value1"));
    }

    #[tokio::test]
    async fn test_store_set_if_present() {
        let store = MemoryStore::new();

        assert!(!store.set_if_present("key1", "value1").await.unwrap());
        assert!(store.get("key1").await.unwrap().is_none());

        store.set("key1", "value1").await.unwrap();
        assert!(store.set_if_present("key1", "value2").await.unwrap());
        assert_eq!(store.get("key1").await.unwrap().as_deref(), Some("value2"));
    }

    #[tokio::test]
    async fn test_store_delete() {
        let store = MemoryStore::new();

        store.set("key1", "value1").await.unwrap();

        assert!(store.delete("key1").await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_delete_nonexistent() {
        let store = MemoryStore::new();

        assert!(!store.delete("nonexistent").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_delete_many() {
        let store = MemoryStore::new();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.set("c", "3").await.unwrap();

        let keys = vec!["a".to_string(), "b".to_string(), "missing".to_string()];
        store.delete_many(&keys).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.exists("c").await.unwrap());
    }

    #[tokio::test]
    async fn test_store_keys_match_all() {
        let store = MemoryStore::new();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        let mut keys = store.keys("*").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_store_keys_exact_match() {
        let store = MemoryStore::new();

        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();

        assert_eq!(store.keys("a").await.unwrap(), vec!["a".to_string()]);
        assert!(store.keys("z").await.unwrap().is_empty());
    }
}
