//! Durable collection of user profiles.
//!
//! The whole collection lives in memory and is written back as one JSON blob
//! on every change. There are no partial writes: a failed write restores the
//! in-memory collection to what it was before the call.

use std::sync::Arc;

use game_core::{UserProfile, normalize_username};

use crate::api::{Result, RuntimeError};
use crate::repository::BlobRepository;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "users";

/// Owns every [`UserProfile`], keyed case-insensitively by username.
pub struct UserStore {
    repository: Arc<dyn BlobRepository>,
    storage_key: String,
    users: Vec<UserProfile>,
}

impl UserStore {
    /// Opens the store and loads whatever the repository holds.
    pub fn open(repository: Arc<dyn BlobRepository>, storage_key: impl Into<String>) -> Self {
        let mut store = Self {
            repository,
            storage_key: storage_key.into(),
            users: Vec::new(),
        };
        store.load_all();
        store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// Unreadable or undecodable data is logged and treated as an empty
    /// collection; startup never fails because of corrupt storage.
    pub fn load_all(&mut self) -> &[UserProfile] {
        self.users = match self.repository.load(&self.storage_key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<UserProfile>>(&bytes) {
                Ok(users) => users,
                Err(e) => {
                    tracing::warn!(
                        key = %self.storage_key,
                        error = %e,
                        "Stored user collection is corrupt; starting empty"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    key = %self.storage_key,
                    error = %e,
                    "Failed to read user collection; starting empty"
                );
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} user profile(s)", self.users.len());
        &self.users
    }

    /// Writes the full collection to the repository.
    pub fn persist_all(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.users).map_err(RuntimeError::Encode)?;
        self.repository.save(&self.storage_key, &bytes)?;
        tracing::debug!("Persisted {} user profile(s)", self.users.len());
        Ok(())
    }

    /// Case-insensitive lookup. Absence is not an error.
    pub fn get_user(&self, username: &str) -> Option<&UserProfile> {
        let key = normalize_username(username);
        self.users.iter().find(|u| u.key() == key)
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Replaces the profile with the same username, or appends it, then
    /// persists the collection.
    pub fn upsert(&mut self, profile: UserProfile) -> Result<()> {
        self.upsert_many(vec![profile])
    }

    /// Applies several profile updates as a single upsert-and-persist unit.
    ///
    /// Either every update is persisted or none is kept in memory.
    pub fn upsert_many(&mut self, profiles: Vec<UserProfile>) -> Result<()> {
        let snapshot = self.users.clone();

        for profile in profiles {
            match self.position(&profile.username) {
                Some(index) => self.users[index] = profile,
                None => self.users.push(profile),
            }
        }

        if let Err(e) = self.persist_all() {
            self.users = snapshot;
            return Err(e);
        }
        Ok(())
    }

    /// Returns the named profile, creating and persisting a blank one first
    /// if it does not exist yet.
    pub fn ensure_profile(&mut self, username: &str) -> Result<UserProfile> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RuntimeError::EmptyUsername);
        }

        if let Some(existing) = self.get_user(username) {
            return Ok(existing.clone());
        }

        let profile = UserProfile::new(username);
        self.upsert(profile.clone())?;
        tracing::info!(username = %username, "Created user profile");
        Ok(profile)
    }

    /// Removes every profile and persists the empty collection.
    pub fn clear(&mut self) -> Result<()> {
        let snapshot = std::mem::take(&mut self.users);
        if let Err(e) = self.persist_all() {
            self.users = snapshot;
            return Err(e);
        }
        tracing::info!("Cleared all user data");
        Ok(())
    }

    fn position(&self, username: &str) -> Option<usize> {
        let key = normalize_username(username);
        self.users.iter().position(|u| u.key() == key)
    }
}
