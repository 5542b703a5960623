//! Storage APIs
//!
//! `localStorage` and `sessionStorage`. Local storage is a JSON object on
//! disk, rewritten after every mutation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StorageError;

/// Storage backend
#[derive(Debug, Default)]
pub struct Storage {
    data: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl Storage {
    /// In-memory storage (sessionStorage)
    pub fn session() -> Self {
        Self::default()
    }

    /// Persistent storage (localStorage) backed by `path`, loading what is already there
    pub fn local(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&contents).map_err(|source| StorageError::Format {
                path: path.clone(),
                source,
            })?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), items = data.len(), "opened local storage");
        Ok(Self { data, path: Some(path) })
    }

    /// Backing file, `None` for session storage
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), value.to_string());
        self.persist()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.data.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.data.clear();
        self.persist()
    }

    /// Key at `index`, in key order
    pub fn key(&self, index: usize) -> Option<&str> {
        self.data.keys().nth(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else { return Ok(()) };
        let io_err = |source| StorageError::Io { path: path.clone(), source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = serde_json::to_string_pretty(&self.data).map_err(|source| StorageError::Format {
            path: path.clone(),
            source,
        })?;
        fs::write(path, contents).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_storage() {
        let mut storage = Storage::session();
        storage.set_item("high-contrast", "true").unwrap();
        assert_eq!(storage.get_item("high-contrast"), Some("true"));
        assert_eq!(storage.key(0), Some("high-contrast"));

        storage.remove_item("high-contrast").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_local_storage_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("local-storage.json");

        let mut storage = Storage::local(&path).unwrap();
        storage.set_item("large-text", "true").unwrap();
        storage.set_item("high-contrast", "false").unwrap();
        drop(storage);

        let reopened = Storage::local(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.get_item("large-text"), Some("true"));
        assert_eq!(reopened.path(), Some(path.as_path()));
    }

    #[test]
    fn test_corrupt_file_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");
        fs::write(&path, "not json").unwrap();

        let err = Storage::local(&path).unwrap_err();
        assert!(matches!(err, StorageError::Format { .. }));
    }
}
