/// Game configuration constants and tunable parameters.
///
/// Tunables are always at least 1; set them through the `with_*` builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    persistent_player_games: u32,
    quick_learner_window: u32,
    precision_streak: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest slot count of any tier (Hard).
    pub const MAX_SLOTS: usize = 4;

    // ===== milestone thresholds (cumulative score) =====
    pub const SCORE_MILESTONE_LOW: u32 = 10;
    pub const SCORE_MILESTONE_MID: u32 = 20;
    pub const SCORE_MILESTONE_HIGH: u32 = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PERSISTENT_PLAYER_GAMES: u32 = 10;
    pub const DEFAULT_QUICK_LEARNER_WINDOW: u32 = 3;
    pub const DEFAULT_PRECISION_STREAK: u32 = 3;

    pub fn new() -> Self {
        Self {
            persistent_player_games: Self::DEFAULT_PERSISTENT_PLAYER_GAMES,
            quick_learner_window: Self::DEFAULT_QUICK_LEARNER_WINDOW,
            precision_streak: Self::DEFAULT_PRECISION_STREAK,
        }
    }

    /// Completed rounds required for the "Persistent Player" achievement.
    pub fn persistent_player_games(&self) -> u32 {
        self.persistent_player_games
    }

    /// A "Great" within this many first rounds unlocks "Quick Learner".
    pub fn quick_learner_window(&self) -> u32 {
        self.quick_learner_window
    }

    /// Consecutive "Great" rounds required for "Precision Training".
    pub fn precision_streak(&self) -> u32 {
        self.precision_streak
    }

    pub fn with_persistent_player_games(mut self, games: u32) -> Self {
        self.persistent_player_games = games.max(1);
        self
    }

    pub fn with_quick_learner_window(mut self, window: u32) -> Self {
        self.quick_learner_window = window.max(1);
        self
    }

    pub fn with_precision_streak(mut self, streak: u32) -> Self {
        self.precision_streak = streak.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_clamp_to_one() {
        let config = GameConfig::default()
            .with_persistent_player_games(0)
            .with_quick_learner_window(0)
            .with_precision_streak(0);

        assert_eq!(config.persistent_player_games(), 1);
        assert_eq!(config.quick_learner_window(), 1);
        assert_eq!(config.precision_streak(), 1);
    }

    #[test]
    fn defaults() {
        let config = GameConfig::new();
        assert_eq!(config.persistent_player_games(), 10);
        assert_eq!(config.quick_learner_window(), 3);
        assert_eq!(config.precision_streak(), 3);
    }
}
