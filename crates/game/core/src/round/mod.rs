//! Rounds and guesses.
//!
//! A [`Round`] is created at round start and never changes afterwards. Its
//! hidden sequence is private: front-ends only learn the tier and the slot
//! count until the round is evaluated. A [`GuessSequence`] is the player's
//! mutable answer sheet, edited slot by slot until it is submitted.

mod error;
mod generator;

pub use error::RoundError;
pub use generator::RoundGenerator;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::evaluate::{self, Evaluation, GuessError};
use crate::palette::{Color, Difficulty};

/// Fixed-capacity color sequence sized for the largest tier.
pub type ColorSequence = ArrayVec<Color, { GameConfig::MAX_SLOTS }>;

/// One play of the game: a generated hidden sequence awaiting a guess.
///
/// Not `Clone`: completing a round consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct Round {
    difficulty: Difficulty,
    nonce: u64,
    hidden: ColorSequence,
}

impl Round {
    /// Builds a round from an explicit hidden sequence.
    ///
    /// The sequence must have exactly `difficulty.slot_count()` colors, all
    /// drawn from the tier's palette, with no repeats.
    pub fn from_hidden(difficulty: Difficulty, hidden: &[Color]) -> Result<Self, RoundError> {
        let expected = difficulty.slot_count();
        if hidden.len() != expected {
            return Err(RoundError::SlotCountMismatch {
                difficulty,
                expected,
                actual: hidden.len(),
            });
        }

        let mut sequence = ColorSequence::new();
        for &color in hidden {
            if !difficulty.allows(color) {
                return Err(RoundError::ColorNotInPalette { difficulty, color });
            }
            if sequence.contains(&color) {
                return Err(RoundError::DuplicateColor { color });
            }
            sequence.push(color);
        }

        Ok(Self::new(difficulty, 0, sequence))
    }

    pub(crate) fn new(difficulty: Difficulty, nonce: u64, hidden: ColorSequence) -> Self {
        Self {
            difficulty,
            nonce,
            hidden,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Sequence number of this round within its generator.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn slot_count(&self) -> usize {
        self.hidden.len()
    }

    /// Colors the player may choose from for this round.
    pub fn palette(&self) -> &'static [Color] {
        self.difficulty.palette()
    }

    /// The hidden sequence. Front-ends should only show this after the round
    /// has been evaluated.
    pub fn reveal(&self) -> &[Color] {
        &self.hidden
    }

    /// An empty answer sheet for this round.
    pub fn blank_guess(&self) -> GuessSequence {
        GuessSequence::default()
    }

    /// Compares `guess` against the hidden sequence.
    pub fn evaluate(&self, guess: &GuessSequence) -> Result<Evaluation, GuessError> {
        evaluate::evaluate(&self.hidden, guess.as_slice())
    }
}

/// Ordered player guess, editable until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessSequence {
    colors: ColorSequence,
}

impl GuessSequence {
    pub fn new(colors: &[Color]) -> Result<Self, RoundError> {
        if colors.len() > GameConfig::MAX_SLOTS {
            return Err(RoundError::TooManySlots {
                len: colors.len(),
                max: GameConfig::MAX_SLOTS,
            });
        }
        Ok(Self {
            colors: colors.iter().copied().collect(),
        })
    }

    /// Parses color names, e.g. from a form submission.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, RoundError> {
        let colors = names
            .iter()
            .map(|name| Color::parse(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Appends a color to the end of the guess.
    pub fn push(&mut self, color: Color) -> Result<(), RoundError> {
        self.colors
            .try_push(color)
            .map_err(|_| RoundError::TooManySlots {
                len: GameConfig::MAX_SLOTS + 1,
                max: GameConfig::MAX_SLOTS,
            })
    }

    /// Replaces the color in `index`.
    pub fn set(&mut self, index: usize, color: Color) -> Result<(), RoundError> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(RoundError::SlotOutOfRange { index, len })?;
        *slot = color;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
