//! Pluggable durable storage for the cart record.
//!
//! The cart persists a single record under a fixed storage name. The backend
//! only moves bytes; serialization stays in the cart store. Hosts pick the
//! backend that matches their environment: a file next to the application
//! state, or memory for tests and ephemeral sessions.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fixed name of the persisted cart record.
pub const STORAGE_KEY: &str = "cart-storage";

/// Errors a storage backend can produce.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable byte store for the cart record.
pub trait CartStorage {
    /// Read the persisted record, or `None` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write the record, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be written.
    fn store(&self, bytes: &[u8]) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file holding the cart record.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage under the fixed record name inside a directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// In-memory storage for tests and sessions without a configured path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: RefCell<Option<Vec<u8>>>,
}

impl MemoryStorage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.record.borrow().clone())
    }

    fn store(&self, bytes: &[u8]) -> Result<(), StorageError> {
        *self.record.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::in_dir(dir.path());

        assert!(storage.load().expect("load").is_none());

        storage.store(b"[1,2,3]").expect("store");
        assert_eq!(storage.load().expect("load"), Some(b"[1,2,3]".to_vec()));

        storage.store(b"[]").expect("store");
        assert_eq!(storage.load().expect("load"), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_storage_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("nested/state/cart.json"));
        storage.store(b"{}").expect("store");
        assert_eq!(storage.load().expect("load"), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().expect("load").is_none());
        storage.store(b"abc").expect("store");
        assert_eq!(storage.load().expect("load"), Some(b"abc".to_vec()));
    }
}
