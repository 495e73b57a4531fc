//! Per-user progress: aggregate stats, round history and progress flags.
//!
//! A [`UserProfile`] owns its history exclusively. Records are appended by
//! [`history::append`] and aggregates are derived by
//! [`crate::progression::ProgressionTracker`]; nothing else mutates a profile.

pub mod history;

mod flags;
mod record;

pub use flags::{Achievement, Achievements, Milestone, Milestones};
pub use record::GameRecord;

/// Durable progress of one player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserProfile {
    pub username: String,
    pub total_score: u32,
    pub games_played: u32,
    /// Fraction of games whose outcome was "Great".
    pub win_rate: f64,
    pub history: Vec<GameRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub milestones: Milestones,
    #[cfg_attr(feature = "serde", serde(default))]
    pub achievements: Achievements,
}

impl UserProfile {
    /// Fresh profile: no games, zero score, every flag unset.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            total_score: 0,
            games_played: 0,
            win_rate: 0.0,
            history: Vec::new(),
            milestones: Milestones::default(),
            achievements: Achievements::default(),
        }
    }

    /// Case-insensitive identity used for lookups.
    pub fn key(&self) -> String {
        normalize_username(&self.username)
    }

    pub fn matches(&self, username: &str) -> bool {
        self.key() == normalize_username(username)
    }

    pub fn milestones_completed(&self) -> usize {
        self.milestones.count()
    }

    pub fn achievements_completed(&self) -> usize {
        self.achievements.count()
    }
}

/// Lookup key for a username: trimmed and lowercased.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_is_blank() {
        let profile = UserProfile::new("Alice");
        assert_eq!(profile.total_score, 0);
        assert_eq!(profile.games_played, 0);
        assert!(profile.history.is_empty());
        assert_eq!(profile.milestones, Milestones::default());
        assert_eq!(profile.achievements, Achievements::default());
        assert_eq!(profile.milestones_completed(), 0);
    }

    #[test]
    fn usernames_match_case_insensitively() {
        let profile = UserProfile::new("Alice");
        assert!(profile.matches("alice"));
        assert!(profile.matches("ALICE "));
        assert!(!profile.matches("alicia"));
        assert_eq!(profile.key(), "alice");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_camel_case_field_names() {
        use crate::evaluate::Outcome;
        use crate::palette::{Color, Difficulty};

        let mut profile = UserProfile::new("Alice");
        profile.history.push(GameRecord {
            id: 1,
            difficulty: Difficulty::Medium,
            guessed_colors: vec![Color::Orange, Color::Red, Color::Yellow],
            target_colors: vec![Color::Red, Color::Orange, Color::Yellow],
            outcome_label: Outcome::AlmostThere,
            round_win_rate: 1.0 / 3.0,
            score: 2,
        });
        profile.milestones.over10_score = true;

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["username"], "Alice");
        assert!(json.get("totalScore").is_some());
        assert!(json.get("gamesPlayed").is_some());
        assert!(json.get("winRate").is_some());
        assert_eq!(json["milestones"]["over10Score"], true);
        assert_eq!(json["achievements"]["explorersFirstStep"], false);

        let record = &json["history"][0];
        assert_eq!(record["difficulty"], "medium");
        assert_eq!(record["outcomeLabel"], "Almost There");
        assert_eq!(record["guessedColors"][0], "orange");
        assert_eq!(record["targetColors"][2], "yellow");

        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
