//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;
use runtime::{DEFAULT_STORAGE_KEY, SessionConfig};

use crate::dirs;

/// Configuration required to bootstrap a game session for a front-end.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
    pub storage_key: String,
    pub seed: Option<u64>,
    pub game: GameConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            save_dir: dirs::data_dir(),
            log_dir: dirs::log_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            seed: None,
            game: GameConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BLOCKBUSTER_SAVE_DIR` - Directory for the profile store (default: platform data dir)
    /// - `BLOCKBUSTER_LOG_DIR` - Directory for log files (default: platform cache dir)
    /// - `BLOCKBUSTER_STORAGE_KEY` - Name of the profile blob (default: `users`)
    /// - `BLOCKBUSTER_SEED` - Fixed RNG seed for reproducible rounds
    /// - `BLOCKBUSTER_PERSISTENT_GAMES` - Rounds needed for Persistent Player (default: 10)
    /// - `BLOCKBUSTER_QUICK_LEARNER_WINDOW` - Early rounds that count for Quick Learner (default: 3)
    /// - `BLOCKBUSTER_PRECISION_STREAK` - "Great" streak for Precision Training (default: 3)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("BLOCKBUSTER_SAVE_DIR").filter(|v| !v.is_empty()) {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("BLOCKBUSTER_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        if let Some(key) = lookup("BLOCKBUSTER_STORAGE_KEY").filter(|v| !v.trim().is_empty()) {
            config.storage_key = key.trim().to_owned();
        }

        config.seed = parse(&lookup, "BLOCKBUSTER_SEED");

        if let Some(games) = parse::<u32>(&lookup, "BLOCKBUSTER_PERSISTENT_GAMES") {
            config.game = config.game.with_persistent_player_games(games);
        }

        if let Some(window) = parse::<u32>(&lookup, "BLOCKBUSTER_QUICK_LEARNER_WINDOW") {
            config.game = config.game.with_quick_learner_window(window);
        }

        if let Some(streak) = parse::<u32>(&lookup, "BLOCKBUSTER_PRECISION_STREAK") {
            config.game = config.game.with_precision_streak(streak);
        }

        config
    }

    /// Session-level view of this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            game_config: self.game.clone(),
            storage_key: self.storage_key.clone(),
            seed: self.seed,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
