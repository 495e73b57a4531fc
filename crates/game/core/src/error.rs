//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `RoundError`, `GuessError`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each operation has its own error type with specific variants
//! - **Severity Classification**: errors are categorized so callers can tell a
//!   programming error apart from a corrupted state
//! - **No partial mutation**: every fallible operation validates before it
//!   touches any state

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: guess length mismatch, unknown difficulty name
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Unrecoverable error, the profile data cannot be trusted.
    Fatal,
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
