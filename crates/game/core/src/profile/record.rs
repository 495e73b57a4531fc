use crate::evaluate::Outcome;
use crate::palette::{Color, Difficulty};

/// Durable, immutable outcome of one completed round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameRecord {
    /// Per-user sequence number, starting at 1.
    pub id: u32,
    pub difficulty: Difficulty,
    pub guessed_colors: Vec<Color>,
    pub target_colors: Vec<Color>,
    pub outcome_label: Outcome,
    /// Fraction of slots guessed correctly.
    pub round_win_rate: f64,
    pub score: u32,
}

impl GameRecord {
    pub fn is_win(&self) -> bool {
        self.outcome_label.is_win()
    }
}
