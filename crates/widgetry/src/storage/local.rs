//! Browser `window.localStorage` store

use super::{KeyValueStore, StorageError, StorageResult};

/// Store backed by the page's local storage
#[derive(Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Opens the window's local storage
    pub fn open() -> StorageResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::unavailable("no window object"))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::unavailable("localStorage disabled"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::unavailable(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::unavailable(format!("{e:?}")))
    }
}
