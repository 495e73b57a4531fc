//! Repository layer for durable runtime data.
//!
//! Repositories only move bytes. Encoding the user collection and tolerating
//! corrupt data is the job of [`crate::store::UserStore`].

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileBlobRepository;
pub use memory::InMemoryBlobRepo;
pub use traits::BlobRepository;
