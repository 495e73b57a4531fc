//! Round scoring.

use crate::palette::Difficulty;

/// Points for a round: correct slots times the tier multiplier.
pub fn score(correct_count: usize, difficulty: Difficulty) -> u32 {
    correct_count as u32 * difficulty.score_multiplier()
}

/// Fraction of slots guessed correctly, in `[0, 1]`.
///
/// `total_slots` is never zero for a real round; zero yields `0.0`.
pub fn round_win_rate(correct_count: usize, total_slots: usize) -> f64 {
    if total_slots == 0 {
        return 0.0;
    }
    correct_count as f64 / total_slots as f64
}

/// Fixed two-decimal rendering used for every rate shown to the player.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}")
}
