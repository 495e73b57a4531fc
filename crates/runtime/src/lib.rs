//! Session orchestration and persistence for the color-memory game.
//!
//! This crate wraps the pure rules in `game-core` with durable profile
//! storage and a synchronous session API. Front-ends embed [`GameSession`]
//! to start rounds, submit guesses and look up profiles.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`store`] owns the profile collection and its persistence rules
//! - [`repository`] provides the blob storage backends
//! - [`api`] exposes the error types downstream clients interact with
pub mod api;
pub mod repository;
pub mod session;
pub mod store;

pub use api::{Result, RuntimeError};
pub use repository::{BlobRepository, FileBlobRepository, InMemoryBlobRepo, RepositoryError};
pub use session::{GameSession, SessionBuilder, SessionConfig};
pub use store::{DEFAULT_STORAGE_KEY, UserStore};
