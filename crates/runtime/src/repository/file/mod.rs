//! File-based repository implementations.

mod blob;

pub use blob::FileBlobRepository;
