//! Repository contract for durable key-value blobs.

use super::Result;

/// Byte-blob storage addressed by a fixed key.
///
/// The user collection is stored as a single blob, so implementations only
/// need whole-value reads and writes. `save` must replace the previous value
/// atomically: a reader sees either the old blob or the new one.
pub trait BlobRepository: Send + Sync {
    /// Load the blob stored under `key`, `None` if nothing was ever saved.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the blob stored under `key`.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Remove the blob stored under `key` (no-op if absent).
    fn delete(&self, key: &str) -> Result<()>;

    /// Check if a blob exists.
    fn exists(&self, key: &str) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}
