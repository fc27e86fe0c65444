//! Repository Layer - Core Traits
//!
//! Defines the abstract key/value interface the snapshots are written to.
//! Implementations can use browser localStorage, in-memory maps, etc.

use thiserror::Error;

use crate::domain::DomainError;

/// Failures reported by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

/// Synchronous string key/value storage
///
/// Mirrors the browser `Storage` API: values are opaque strings and a
/// missing key is `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
