//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from rule validation and repositories so front-ends can
//! bubble them up with consistent context.

use thiserror::Error;

use game_core::{ErrorSeverity, GameError, RejectedGuess, RoundError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no user is logged in")]
    NoActiveUser,

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("unknown user '{username}'")]
    UnknownUser { username: String },

    #[error(transparent)]
    Round(#[from] RoundError),

    /// The guess did not fit the round; the round is returned unplayed.
    #[error(transparent)]
    Rejected(#[from] RejectedGuess),

    #[error("failed to encode user collection: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of the underlying failure.
    ///
    /// Caller mistakes are `Validation`; storage failures are `Internal`.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::NoActiveUser
            | RuntimeError::EmptyUsername
            | RuntimeError::UnknownUser { .. } => ErrorSeverity::Validation,
            RuntimeError::Round(err) => err.severity(),
            RuntimeError::Rejected(rejected) => rejected.error.severity(),
            RuntimeError::Encode(_) | RuntimeError::Repository(_) => ErrorSeverity::Internal,
        }
    }
}
