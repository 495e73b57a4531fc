//! Errors raised while building rounds and guesses.

use crate::error::{ErrorSeverity, GameError};
use crate::palette::{Color, Difficulty};

/// Errors that occur when a round or guess is assembled from caller input.
///
/// All variants are precondition violations: the caller supplied something
/// the intended flow can never produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    /// Difficulty name did not match any tier.
    #[error("unknown difficulty '{name}'")]
    UnknownDifficulty { name: String },

    /// Color name did not match any color.
    #[error("unknown color '{name}'")]
    UnknownColor { name: String },

    /// Hidden sequence length does not match the tier's slot count.
    #[error("{difficulty} round needs {expected} hidden colors, got {actual}")]
    SlotCountMismatch {
        difficulty: Difficulty,
        expected: usize,
        actual: usize,
    },

    /// Hidden sequence uses a color outside the tier's palette.
    #[error("{color} is not in the {difficulty} palette")]
    ColorNotInPalette { difficulty: Difficulty, color: Color },

    /// Hidden sequence repeats a color.
    #[error("hidden sequence repeats {color}")]
    DuplicateColor { color: Color },

    /// Guess slot index past the end of the sequence.
    #[error("slot {index} out of range (slots: {len})")]
    SlotOutOfRange { index: usize, len: usize },

    /// More colors than any tier has slots.
    #[error("sequence of {len} colors exceeds the maximum of {max} slots")]
    TooManySlots { len: usize, max: usize },
}

impl GameError for RoundError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use RoundError::*;
        match self {
            UnknownDifficulty { .. } => "ROUND_UNKNOWN_DIFFICULTY",
            UnknownColor { .. } => "ROUND_UNKNOWN_COLOR",
            SlotCountMismatch { .. } => "ROUND_SLOT_COUNT_MISMATCH",
            ColorNotInPalette { .. } => "ROUND_COLOR_NOT_IN_PALETTE",
            DuplicateColor { .. } => "ROUND_DUPLICATE_COLOR",
            SlotOutOfRange { .. } => "ROUND_SLOT_OUT_OF_RANGE",
            TooManySlots { .. } => "ROUND_TOO_MANY_SLOTS",
        }
    }
}
