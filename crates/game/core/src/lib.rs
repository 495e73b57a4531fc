//! Deterministic game rules for the color-memory guessing game.
//!
//! `game-core` defines the canonical rules (palettes, round generation, guess
//! evaluation, scoring and progression) and exposes pure APIs with no I/O.
//! All profile mutation flows through [`engine::GameEngine`]; persistence and
//! session handling live in the `runtime` crate.
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod palette;
pub mod profile;
pub mod progression;
pub mod rng;
pub mod round;
pub mod score;

pub use config::GameConfig;
pub use engine::{GameEngine, RejectedGuess, RoundReport};
pub use error::{ErrorSeverity, GameError};
pub use evaluate::{Evaluation, GuessError, Outcome, evaluate};
pub use palette::{Color, Difficulty};
pub use profile::{
    Achievement, Achievements, GameRecord, Milestone, Milestones, UserProfile, normalize_username,
};
pub use progression::{AchievementRule, AchievementRules, ProgressUpdate, ProgressionTracker};
pub use rng::{PcgRng, RngOracle};
pub use round::{ColorSequence, GuessSequence, Round, RoundError, RoundGenerator};
pub use score::{format_rate, round_win_rate};
