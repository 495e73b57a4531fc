//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, logging setup, and session assembly that
//! can be reused by any presentation layer.
pub mod builder;
pub mod config;
pub mod dirs;
pub mod logging;

pub use builder::{SessionSetup, SetupBuilder};
pub use config::ClientConfig;
pub use logging::setup_logging;
