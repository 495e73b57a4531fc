//! File-based BlobRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{BlobRepository, RepositoryError, Result};

/// File-based implementation of BlobRepository.
///
/// # File Format
///
/// Each key is stored as `{key}.json` under the base directory. Writes go to
/// `{key}.json.tmp` first and are then renamed over the target, so a crash
/// mid-write never leaves a truncated blob behind.
pub struct FileBlobRepository {
    base_dir: PathBuf,
}

impl FileBlobRepository {
    /// Create a new file-based blob repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a blob file.
    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_owned()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl BlobRepository for FileBlobRepository {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded {} bytes from {}", bytes.len(), path.display());

        Ok(Some(bytes))
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.blob_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} bytes to {}", bytes.len(), path.display());

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", path.display());
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.blob_path(key).map(|p| p.exists()).unwrap_or(false)
    }
}
