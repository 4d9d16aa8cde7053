//! Local persistent storage for the cart.
//!
//! A deliberately small key-value surface: the cart mirror is one key holding
//! one JSON document. [`FileStore`] is the desktop analogue of the web
//! client's local storage (one file per key under a configured directory);
//! [`MemoryStore`] backs tests and sessions that opt out of persistence.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors surfaced by a [`KeyValueStore`].
///
/// Callers treat these as advisory: the cart never propagates a storage
/// failure, it logs and carries on with in-memory state.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// The underlying file operation failed.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// String-keyed, string-valued persistent storage.
///
/// Read once at startup, written after each mutation. Not watched for
/// external changes: two running instances each hold an independent cart.
pub trait KeyValueStore {
    /// Read the value under `key`; `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the delete fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory backing this store.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and persistence-free sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cart").expect("readable"), None);

        store.set("cart", "[]").expect("writable");
        assert_eq!(store.get("cart").expect("readable").as_deref(), Some("[]"));

        store.remove("cart").expect("removable");
        assert_eq!(store.get("cart").expect("readable"), None);
        store.remove("cart").expect("absent key is a no-op");
    }

    #[test]
    fn file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.get("cart").expect("readable"), None);
        store.set("cart", r#"[{"id":"a"}]"#).expect("writable");

        // A fresh instance over the same directory sees the value.
        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.get("cart").expect("readable").as_deref(),
            Some(r#"[{"id":"a"}]"#)
        );

        store.remove("cart").expect("removable");
        assert_eq!(store.get("cart").expect("readable"), None);
        store.remove("cart").expect("absent key is a no-op");
    }
}
