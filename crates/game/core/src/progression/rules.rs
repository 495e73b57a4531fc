//! Achievement unlock rules.
//!
//! Each achievement is unlocked by exactly one [`AchievementRule`]. Rules are
//! evaluated against the profile *after* the newest record has been appended
//! and aggregates recomputed, together with that newest record.
//!
//! | Achievement          | Trigger                                                  |
//! |----------------------|----------------------------------------------------------|
//! | Explorer's First Step| at least one completed round                             |
//! | Curious Mind         | history contains a round of every tier                   |
//! | Persistent Player    | `games_played >= persistent_player_games`                |
//! | Quick Learner        | newest record is "Great" and its id <= `quick_learner_window` |
//! | Precision Training   | the last `precision_streak` records are all "Great"      |
//! | Strategic Thinker    | newest record is a "Great" on Hard                       |

use std::sync::Arc;

use crate::config::GameConfig;
use crate::palette::Difficulty;
use crate::profile::{Achievement, GameRecord, UserProfile};

/// Predicate that unlocks one achievement.
pub trait AchievementRule: Send + Sync {
    /// Human-readable rule name (used in logging).
    fn name(&self) -> &'static str;

    /// The achievement this rule unlocks.
    fn achievement(&self) -> Achievement;

    /// Whether the condition holds for `profile` after `newest` was recorded.
    fn is_met(&self, profile: &UserProfile, newest: &GameRecord) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct ExplorersFirstStepRule;

impl AchievementRule for ExplorersFirstStepRule {
    fn name(&self) -> &'static str {
        "explorers_first_step"
    }

    fn achievement(&self) -> Achievement {
        Achievement::ExplorersFirstStep
    }

    fn is_met(&self, profile: &UserProfile, _newest: &GameRecord) -> bool {
        !profile.history.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CuriousMindRule;

impl AchievementRule for CuriousMindRule {
    fn name(&self) -> &'static str {
        "curious_mind"
    }

    fn achievement(&self) -> Achievement {
        Achievement::CuriousMind
    }

    fn is_met(&self, profile: &UserProfile, _newest: &GameRecord) -> bool {
        Difficulty::ALL
            .iter()
            .all(|tier| profile.history.iter().any(|r| r.difficulty == *tier))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PersistentPlayerRule {
    games: u32,
}

impl PersistentPlayerRule {
    /// Values below 1 are raised to 1.
    pub fn new(games: u32) -> Self {
        Self {
            games: games.max(1),
        }
    }
}

impl AchievementRule for PersistentPlayerRule {
    fn name(&self) -> &'static str {
        "persistent_player"
    }

    fn achievement(&self) -> Achievement {
        Achievement::PersistentPlayer
    }

    fn is_met(&self, profile: &UserProfile, _newest: &GameRecord) -> bool {
        profile.games_played >= self.games
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuickLearnerRule {
    window: u32,
}

impl QuickLearnerRule {
    /// Values below 1 are raised to 1.
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
        }
    }
}

impl AchievementRule for QuickLearnerRule {
    fn name(&self) -> &'static str {
        "quick_learner"
    }

    fn achievement(&self) -> Achievement {
        Achievement::QuickLearner
    }

    fn is_met(&self, _profile: &UserProfile, newest: &GameRecord) -> bool {
        newest.is_win() && newest.id <= self.window
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PrecisionTrainingRule {
    streak: u32,
}

impl PrecisionTrainingRule {
    /// Values below 1 are raised to 1.
    pub fn new(streak: u32) -> Self {
        Self {
            streak: streak.max(1),
        }
    }
}

impl AchievementRule for PrecisionTrainingRule {
    fn name(&self) -> &'static str {
        "precision_training"
    }

    fn achievement(&self) -> Achievement {
        Achievement::PrecisionTraining
    }

    fn is_met(&self, profile: &UserProfile, _newest: &GameRecord) -> bool {
        let streak = self.streak as usize;
        profile.history.len() >= streak
            && profile.history[profile.history.len() - streak..]
                .iter()
                .all(GameRecord::is_win)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StrategicThinkerRule;

impl AchievementRule for StrategicThinkerRule {
    fn name(&self) -> &'static str {
        "strategic_thinker"
    }

    fn achievement(&self) -> Achievement {
        Achievement::StrategicThinker
    }

    fn is_met(&self, _profile: &UserProfile, newest: &GameRecord) -> bool {
        newest.is_win() && newest.difficulty == Difficulty::Hard
    }
}

/// Ordered set of rules evaluated after every round.
#[derive(Clone)]
pub struct AchievementRules {
    rules: Arc<[Arc<dyn AchievementRule>]>,
}

impl AchievementRules {
    pub fn new(rules: Vec<Arc<dyn AchievementRule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// The six built-in rules, parameterized by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(vec![
            Arc::new(ExplorersFirstStepRule) as Arc<dyn AchievementRule>,
            Arc::new(StrategicThinkerRule),
            Arc::new(PersistentPlayerRule::new(config.persistent_player_games())),
            Arc::new(CuriousMindRule),
            Arc::new(PrecisionTrainingRule::new(config.precision_streak())),
            Arc::new(QuickLearnerRule::new(config.quick_learner_window())),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn AchievementRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for AchievementRules {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl core::fmt::Debug for AchievementRules {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}
