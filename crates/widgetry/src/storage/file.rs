//! JSON-file backed store
//!
//! The whole file is one JSON object mapping keys to string values. Every
//! write goes to a temp file in the same directory, is synced, and then
//! renamed over the original so readers never observe a partial snapshot.
//! A failed write leaves no temp file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{KeyValueStore, StorageResult};

/// Store persisted as a single JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a handle; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry; a missing or blank file is empty
    pub fn entries(&self) -> StorageResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), keys = entries.len(), "storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("notes").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/storage.json");
        let mut store = FileStore::new(&path);
        store.set("notes", "[]").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("storage.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupant"), "x").unwrap();

        let store = FileStore::new(&target);
        let mut entries = BTreeMap::new();
        entries.insert("notes".to_string(), "[]".to_string());
        assert!(store.write_entries(&entries).is_err());

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("s.json"));
        store.set("notes", "[1]").unwrap();
        store.set("notes_app_data", "[2]").unwrap();

        let reopened = FileStore::new(dir.path().join("s.json"));
        assert_eq!(reopened.get("notes").unwrap().as_deref(), Some("[1]"));
        assert_eq!(reopened.get("notes_app_data").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_remove_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("s.json"));
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_blank_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "  \n").unwrap();
        assert!(FileStore::new(&path).entries().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        fs::write(&path, "not json").unwrap();
        let result = FileStore::new(&path).get("notes");
        assert!(matches!(result, Err(StorageError::Json(_))));
    }
}
