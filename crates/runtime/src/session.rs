//! Game session: the boundary a presentation layer talks to.
//!
//! A session owns the [`UserStore`], the round generator and the progression
//! rules. Every call is synchronous and runs to completion before returning;
//! the session is meant to be driven by one front-end at a time.

use std::sync::Arc;

use game_core::{
    AchievementRules, Difficulty, GameConfig, GameEngine, GameRecord, GuessSequence,
    ProgressionTracker, Round, RoundGenerator, RoundReport, UserProfile, normalize_username,
};

use crate::api::{Result, RuntimeError};
use crate::repository::{BlobRepository, InMemoryBlobRepo};
use crate::store::{DEFAULT_STORAGE_KEY, UserStore};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub game_config: GameConfig,
    /// Key the user collection is stored under.
    pub storage_key: String,
    /// Fixed RNG seed; a random one is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            seed: None,
        }
    }
}

pub struct GameSession {
    store: UserStore,
    generator: RoundGenerator,
    tracker: ProgressionTracker,
    active_user: Option<String>,
}

impl GameSession {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates (if needed) and activates the named profile.
    pub fn login(&mut self, username: &str) -> Result<UserProfile> {
        let profile = self.store.ensure_profile(username)?;
        self.active_user = Some(profile.username.clone());
        tracing::info!(username = %profile.username, "User logged in");
        Ok(profile)
    }

    pub fn logout(&mut self) {
        if let Some(username) = self.active_user.take() {
            tracing::info!(username = %username, "User logged out");
        }
    }

    pub fn active_profile(&self) -> Option<&UserProfile> {
        self.active_user
            .as_deref()
            .and_then(|username| self.store.get_user(username))
    }

    /// Generates a fresh round. The hidden sequence stays inside [`Round`].
    pub fn start_round(&mut self, difficulty: Difficulty) -> Round {
        let round = self.generator.generate(difficulty);
        tracing::debug!(
            difficulty = %difficulty,
            nonce = round.nonce(),
            "Started round"
        );
        round
    }

    /// Like [`start_round`](Self::start_round) but takes the tier name as
    /// entered by the user, rejecting unknown names.
    pub fn start_round_named(&mut self, difficulty: &str) -> Result<Round> {
        let difficulty = Difficulty::parse(difficulty)?;
        Ok(self.start_round(difficulty))
    }

    /// Scores a guess for the active user and returns the new history record.
    ///
    /// The round is consumed. A guess of the wrong length comes back as
    /// [`RuntimeError::Rejected`], which carries the round for a retry.
    pub fn submit_guess(&mut self, round: Round, guess: &GuessSequence) -> Result<GameRecord> {
        self.play_round(round, guess).map(|report| report.record)
    }

    /// Scores a guess for the active user and returns the full report,
    /// including newly unlocked milestones and achievements.
    pub fn play_round(&mut self, round: Round, guess: &GuessSequence) -> Result<RoundReport> {
        let username = self.active_user.clone().ok_or(RuntimeError::NoActiveUser)?;
        self.play_round_for(&username, round, guess)
    }

    /// Scores a guess for `username`.
    ///
    /// Evaluate, score, append, recompute and persist succeed together; on
    /// any failure the stored profile is left as it was.
    pub fn play_round_for(
        &mut self,
        username: &str,
        round: Round,
        guess: &GuessSequence,
    ) -> Result<RoundReport> {
        let mut profile =
            self.store
                .get_user(username)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownUser {
                    username: username.to_owned(),
                })?;

        let report = GameEngine::new(&mut profile, &self.tracker).complete_round(round, guess)?;
        self.store.upsert(profile)?;

        tracing::info!(
            username = %username,
            difficulty = %report.record.difficulty,
            outcome = %report.record.outcome_label,
            score = report.record.score,
            "Round completed"
        );
        for milestone in &report.progress.milestones {
            tracing::info!(username = %username, milestone = %milestone, "Milestone reached");
        }
        for achievement in &report.progress.achievements {
            tracing::info!(username = %username, achievement = %achievement, "Achievement unlocked");
        }

        Ok(report)
    }

    pub fn fetch_profile(&self, username: &str) -> Option<&UserProfile> {
        self.store.get_user(username)
    }

    /// Idempotent create-or-fetch.
    pub fn ensure_profile(&mut self, username: &str) -> Result<UserProfile> {
        self.store.ensure_profile(username)
    }

    /// Deletes every profile and logs the active user out.
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.store.clear()?;
        self.active_user = None;
        Ok(())
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn is_active(&self, username: &str) -> bool {
        self.active_user
            .as_deref()
            .is_some_and(|active| normalize_username(active) == normalize_username(username))
    }
}

/// Builder for [`GameSession`].
pub struct SessionBuilder {
    config: SessionConfig,
    repository: Option<Arc<dyn BlobRepository>>,
    rules: Option<AchievementRules>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            repository: None,
            rules: None,
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Storage backend (defaults to an in-memory repository)
    pub fn repository(mut self, repository: Arc<dyn BlobRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Pin the RNG seed so rounds are reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Replace the built-in achievement rules.
    pub fn rules(mut self, rules: AchievementRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> GameSession {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryBlobRepo::new()));
        let store = UserStore::open(repository, self.config.storage_key);

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let rules = self
            .rules
            .unwrap_or_else(|| AchievementRules::from_config(&self.config.game_config));

        tracing::debug!(users = store.len(), "Game session ready");

        GameSession {
            store,
            generator: RoundGenerator::new(seed),
            tracker: ProgressionTracker::new(rules),
            active_user: None,
        }
    }
}
