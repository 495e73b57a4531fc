//! Guess evaluation.
//!
//! Matching is positional: slot `i` of the guess counts only if it equals
//! slot `i` of the hidden sequence. A right color in the wrong slot earns
//! nothing.

use crate::error::{ErrorSeverity, GameError};
use crate::palette::Color;

/// Outcome label attached to every completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every slot correct.
    #[strum(serialize = "Great")]
    #[cfg_attr(feature = "serde", serde(rename = "Great"))]
    Great,
    /// Some, but not all, slots correct.
    #[strum(serialize = "Almost There")]
    #[cfg_attr(feature = "serde", serde(rename = "Almost There"))]
    AlmostThere,
    /// No slot correct.
    #[strum(serialize = "Try Again")]
    #[cfg_attr(feature = "serde", serde(rename = "Try Again"))]
    TryAgain,
}

impl Outcome {
    /// Classifies `correct` hits out of `total` slots.
    pub fn classify(correct: usize, total: usize) -> Self {
        if correct == 0 {
            Outcome::TryAgain
        } else if correct >= total {
            Outcome::Great
        } else {
            Outcome::AlmostThere
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Great)
    }
}

/// Result of comparing a guess with a hidden sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub correct_count: usize,
    pub total_slots: usize,
    pub outcome: Outcome,
}

/// Guess submitted with the wrong number of slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guess has {actual} slots but the round has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl GameError for GuessError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GuessError::LengthMismatch { .. } => "GUESS_LENGTH_MISMATCH",
        }
    }
}

/// Compares `guess` with `hidden` slot by slot.
///
/// Fails without side effects when the lengths differ.
pub fn evaluate(hidden: &[Color], guess: &[Color]) -> Result<Evaluation, GuessError> {
    if guess.len() != hidden.len() {
        return Err(GuessError::LengthMismatch {
            expected: hidden.len(),
            actual: guess.len(),
        });
    }

    let correct_count = hidden
        .iter()
        .zip(guess)
        .filter(|(target, guessed)| target == guessed)
        .count();

    Ok(Evaluation {
        correct_count,
        total_slots: hidden.len(),
        outcome: Outcome::classify(correct_count, hidden.len()),
    })
}
