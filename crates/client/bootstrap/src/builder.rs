//! Builds the game session and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_core::AchievementRules;
use runtime::{BlobRepository, FileBlobRepository, GameSession};

use crate::config::ClientConfig;

/// Builder that assembles storage, rules, and configuration for clients.
pub struct SetupBuilder {
    config: ClientConfig,
    repository: Option<Arc<dyn BlobRepository>>,
    rules: Option<AchievementRules>,
}

impl SetupBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            repository: None,
            rules: None,
        }
    }

    /// Provide a custom storage backend instead of the file store in `save_dir`.
    pub fn repository(mut self, repository: Arc<dyn BlobRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Provide a custom achievement rule set.
    pub fn rules(mut self, rules: AchievementRules) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> Result<SessionSetup> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => {
                let repo = FileBlobRepository::new(&self.config.save_dir).with_context(|| {
                    format!(
                        "Failed to open save directory: {}",
                        self.config.save_dir.display()
                    )
                })?;
                Arc::new(repo) as Arc<dyn BlobRepository>
            }
        };

        let mut builder = GameSession::builder()
            .config(self.config.session_config())
            .repository(repository);

        if let Some(rules) = self.rules {
            builder = builder.rules(rules);
        }

        let session = builder.build();
        tracing::info!(
            save_dir = %self.config.save_dir.display(),
            users = session.store().len(),
            "Session ready"
        );

        Ok(SessionSetup {
            config: self.config,
            session,
        })
    }
}

pub struct SessionSetup {
    pub config: ClientConfig,
    pub session: GameSession,
}
