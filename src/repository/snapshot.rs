//! Snapshot Repository
//!
//! Reads and writes one whole state value as JSON under a fixed key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::{KeyValueStore, StorageError, StorageResult};

/// Result of reading the snapshot key
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    /// Key absent, or the backend could not be read
    Missing,
    /// Key present but unreadable; it has been removed.
    Corrupt,
}

impl<T> LoadOutcome<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            LoadOutcome::Missing | LoadOutcome::Corrupt => None,
        }
    }
}

pub struct SnapshotRepository<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load<T: DeserializeOwned>(&mut self) -> LoadOutcome<T> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Missing,
            // a failed read is no data; the stored value may still be fine
            Err(err) => {
                log::warn!("Could not read saved data under {}: {}", self.key, err);
                return LoadOutcome::Missing;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => LoadOutcome::Loaded(value),
            Err(err) => {
                log::warn!("Discarding unreadable saved data under {}: {}", self.key, err);
                self.discard();
                LoadOutcome::Corrupt
            }
        }
    }

    pub fn save<T: Serialize>(&mut self, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &json).inspect_err(|err| {
            log::warn!("Failed to save {}: {}", self.key, err);
        })
    }

    pub fn clear(&mut self) -> StorageResult<()> {
        self.backend.remove(&self.key).inspect_err(|err| {
            log::warn!("Failed to clear {}: {}", self.key, err);
        })
    }

    fn discard(&mut self) {
        // best-effort; the warning from clear() is enough
        let _ = self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::repository::MemoryStore;

    /// Fails the first `failures` reads, then behaves like `MemoryStore`
    struct FlakyStore {
        inner: MemoryStore,
        failures: Cell<u32>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            let left = self.failures.get();
            if left > 0 {
                self.failures.set(left - 1);
                return Err(StorageError::Read {
                    key: key.to_string(),
                    reason: "SecurityError".to_string(),
                });
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_missing_key() {
        let mut repo = SnapshotRepository::new(MemoryStore::new(), "k");
        assert_eq!(repo.load::<Vec<u32>>(), LoadOutcome::Missing);
    }

    #[test]
    fn test_save_then_load() {
        let mut repo = SnapshotRepository::new(MemoryStore::new(), "k");
        repo.save(&vec![1u32, 2, 3]).unwrap();
        assert_eq!(repo.backend().raw("k"), Some("[1,2,3]"));
        assert_eq!(repo.load::<Vec<u32>>(), LoadOutcome::Loaded(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_value_is_removed() {
        let mut repo = SnapshotRepository::new(MemoryStore::with_entry("k", "{not json"), "k");
        assert_eq!(repo.load::<Vec<u32>>(), LoadOutcome::Corrupt);
        assert!(!repo.backend().contains_key("k"));
    }

    #[test]
    fn test_read_failure_keeps_stored_value() {
        let flaky = FlakyStore {
            inner: MemoryStore::with_entry("k", "[1,2]"),
            failures: Cell::new(1),
        };
        let mut repo = SnapshotRepository::new(flaky, "k");

        assert_eq!(repo.load::<Vec<u32>>(), LoadOutcome::Missing);
        assert!(repo.backend().inner.contains_key("k"));
        assert_eq!(repo.load::<Vec<u32>>(), LoadOutcome::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_clear() {
        let mut repo = SnapshotRepository::new(MemoryStore::with_entry("k", "[]"), "k");
        repo.clear().unwrap();
        assert_eq!(repo.load::<Vec<u32>>().into_option(), None);
    }
}
