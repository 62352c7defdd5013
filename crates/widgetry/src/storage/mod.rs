//! Key/value persistence behind the notes boards
//!
//! Values are opaque strings, exactly like browser local storage, so the
//! same serialized snapshot can live in memory, in a file, or in the page.

mod file;
#[cfg(feature = "wasm")]
mod local;

pub use file::FileStore;
#[cfg(feature = "wasm")]
pub use local::LocalStorage;

use std::collections::HashMap;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file is not a JSON object of strings
    #[error("Malformed storage file: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend could not be reached
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

impl StorageError {
    /// Create an unavailable-backend error
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Synchronous string store keyed by name, last write wins
pub trait KeyValueStore {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes `key`; missing keys are not an error
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

/// In-memory store for tests and mock hosts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Returns the number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let mut store = MemoryStore::with_entry("k", "old");
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::with_entry("k", "v");
        store.remove("k").unwrap();
        store.remove("missing").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_through_mut_ref() {
        fn write_through<S: KeyValueStore>(mut store: S) {
            store.set("a", "1").unwrap();
        }

        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_unavailable_error_display() {
        let err = StorageError::unavailable("no window");
        assert_eq!(err.to_string(), "Storage unavailable: no window");
    }
}
