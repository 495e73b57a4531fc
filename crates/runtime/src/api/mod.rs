//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other modules can stay focused on storage and session handling.

pub mod errors;

pub use errors::{Result, RuntimeError};
