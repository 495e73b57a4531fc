//! Append-only round history.
//!
//! Records are never reordered, edited or removed once appended.

use crate::evaluate::Outcome;
use crate::round::{GuessSequence, Round};

use super::{GameRecord, UserProfile};

/// Appends the record for a finished round to `profile.history`.
///
/// The record id is `history.len() + 1`, so ids are per-user and start at 1.
pub fn append<'a>(
    profile: &'a mut UserProfile,
    round: &Round,
    guess: &GuessSequence,
    outcome: Outcome,
    round_win_rate: f64,
    score: u32,
) -> &'a GameRecord {
    let id = next_id(profile);
    profile.history.push(GameRecord {
        id,
        difficulty: round.difficulty(),
        guessed_colors: guess.as_slice().to_vec(),
        target_colors: round.reveal().to_vec(),
        outcome_label: outcome,
        round_win_rate,
        score,
    });
    &profile.history[profile.history.len() - 1]
}

/// Id the next appended record will receive.
pub fn next_id(profile: &UserProfile) -> u32 {
    profile.history.len() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Color, Difficulty};

    #[test]
    fn ids_are_sequential_per_user() {
        let round = Round::from_hidden(Difficulty::Easy, &[Color::Cyan, Color::Blue]).unwrap();
        let guess = GuessSequence::new(&[Color::Cyan, Color::Blue]).unwrap();

        let mut alice = UserProfile::new("alice");
        let mut bob = UserProfile::new("bob");

        assert_eq!(append(&mut alice, &round, &guess, Outcome::Great, 1.0, 2).id, 1);
        assert_eq!(append(&mut alice, &round, &guess, Outcome::Great, 1.0, 2).id, 2);
        assert_eq!(append(&mut bob, &round, &guess, Outcome::Great, 1.0, 2).id, 1);
        assert_eq!(alice.history.len(), 2);
    }

    #[test]
    fn record_captures_round_and_guess() {
        let round = Round::from_hidden(
            Difficulty::Medium,
            &[Color::Red, Color::Orange, Color::Yellow],
        )
        .unwrap();
        let guess = GuessSequence::new(&[Color::Orange, Color::Red, Color::Yellow]).unwrap();
        let mut profile = UserProfile::new("alice");

        let record = append(&mut profile, &round, &guess, Outcome::AlmostThere, 1.0 / 3.0, 2);

        assert_eq!(record.difficulty, Difficulty::Medium);
        assert_eq!(record.target_colors, vec![Color::Red, Color::Orange, Color::Yellow]);
        assert_eq!(record.guessed_colors, vec![Color::Orange, Color::Red, Color::Yellow]);
        assert_eq!(record.outcome_label, Outcome::AlmostThere);
        assert_eq!(record.score, 2);
    }
}
