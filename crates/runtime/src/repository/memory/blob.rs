//! In-memory BlobRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{BlobRepository, RepositoryError, Result};

/// In-memory implementation of BlobRepository.
///
/// Nothing survives the process; useful for tests and guest sessions.
pub struct InMemoryBlobRepo {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Create with a blob already stored under `key`.
    pub fn with_blob(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), bytes.into());
        Self {
            blobs: RwLock::new(blobs),
        }
    }
}

impl Default for InMemoryBlobRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobRepository for InMemoryBlobRepo {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        blobs.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        blobs.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.blobs
            .read()
            .map(|blobs| blobs.contains_key(key))
            .unwrap_or(false)
    }
}
