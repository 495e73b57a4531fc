//! Round completion pipeline.
//!
//! The [`GameEngine`] is the only reducer for a [`UserProfile`]. Completing a
//! round runs evaluate → score → append → recompute. The guess is validated
//! before anything is written, so a rejected guess leaves the profile exactly
//! as it was and hands the round back for another try.

use crate::evaluate::{Evaluation, GuessError};
use crate::profile::{GameRecord, UserProfile, history};
use crate::progression::{ProgressUpdate, ProgressionTracker};
use crate::round::{GuessSequence, Round};
use crate::score;

/// Complete outcome of one finished round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// The record appended to the player's history.
    pub record: GameRecord,

    /// Raw comparison result (hit count and outcome).
    pub evaluation: Evaluation,

    /// Milestones and achievements unlocked by this round.
    pub progress: ProgressUpdate,
}

/// A guess that could not be evaluated, together with the untouched round.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct RejectedGuess {
    pub round: Round,
    #[source]
    pub error: GuessError,
}

impl RejectedGuess {
    /// Takes the round back so the player can submit a corrected guess.
    pub fn into_round(self) -> Round {
        self.round
    }
}

/// Applies finished rounds to a borrowed profile.
pub struct GameEngine<'a> {
    profile: &'a mut UserProfile,
    tracker: &'a ProgressionTracker,
}

impl<'a> GameEngine<'a> {
    pub fn new(profile: &'a mut UserProfile, tracker: &'a ProgressionTracker) -> Self {
        Self { profile, tracker }
    }

    /// Scores `guess` against `round` and folds the result into the profile.
    ///
    /// The round is consumed on success, so it yields exactly one record:
    ///
    /// ```compile_fail
    /// use game_core::{Color, Difficulty, GameEngine, GuessSequence, ProgressionTracker, Round, UserProfile};
    ///
    /// let tracker = ProgressionTracker::default();
    /// let mut profile = UserProfile::new("alice");
    /// let round = Round::from_hidden(Difficulty::Easy, &[Color::Cyan, Color::Blue]).unwrap();
    /// let guess = GuessSequence::new(&[Color::Cyan, Color::Blue]).unwrap();
    ///
    /// let mut engine = GameEngine::new(&mut profile, &tracker);
    /// engine.complete_round(round, &guess).unwrap();
    /// engine.complete_round(round, &guess).unwrap();
    /// ```
    pub fn complete_round(
        &mut self,
        round: Round,
        guess: &GuessSequence,
    ) -> Result<RoundReport, RejectedGuess> {
        let evaluation = match round.evaluate(guess) {
            Ok(evaluation) => evaluation,
            Err(error) => return Err(RejectedGuess { round, error }),
        };

        let points = score::score(evaluation.correct_count, round.difficulty());
        let rate = score::round_win_rate(evaluation.correct_count, evaluation.total_slots);

        let record = history::append(
            self.profile,
            &round,
            guess,
            evaluation.outcome,
            rate,
            points,
        )
        .clone();
        let progress = self.tracker.recompute(self.profile);

        Ok(RoundReport {
            record,
            evaluation,
            progress,
        })
    }
}
