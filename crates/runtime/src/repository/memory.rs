//! In-memory key-value store for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::error::{RepositoryError, Result};
use super::traits::KeyValueStore;

/// In-memory implementation of [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::KeyValueStoreExt;

    #[test]
    fn save_then_load_returns_value() {
        let store = InMemoryKeyValueStore::new();

        store.save("numbers", &vec![1u32, 2, 3]).unwrap();

        assert_eq!(store.load_or("numbers", Vec::<u32>::new()), vec![1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let store = InMemoryKeyValueStore::new();
        store.set_raw("count", "{not json").unwrap();

        assert_eq!(store.load_or("count", 7u32), 7);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = InMemoryKeyValueStore::new();
        store.remove("nothing").unwrap();
        assert!(store.is_empty());
    }
}
