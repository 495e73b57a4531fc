//! Aggregate stats, milestones and achievements.
//!
//! [`ProgressionTracker::recompute`] is the only place aggregates are derived.
//! It treats the history as the source of truth: `games_played`,
//! `total_score` and `win_rate` are recomputed from it, so calling it twice on
//! the same history yields the same profile. Flags are only ever set, never
//! cleared.

pub mod rules;

pub use rules::{AchievementRule, AchievementRules};

use crate::config::GameConfig;
use crate::palette::Difficulty;
use crate::profile::{Achievement, Milestone, UserProfile};

/// Flags that flipped to `true` during one recompute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub milestones: Vec<Milestone>,
    pub achievements: Vec<Achievement>,
}

impl ProgressUpdate {
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty() && self.achievements.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProgressionTracker {
    rules: AchievementRules,
}

impl ProgressionTracker {
    pub fn new(rules: AchievementRules) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(AchievementRules::from_config(config))
    }

    pub fn rules(&self) -> &AchievementRules {
        &self.rules
    }

    /// Brings aggregates and flags in line with `profile.history`.
    pub fn recompute(&self, profile: &mut UserProfile) -> ProgressUpdate {
        let games = profile.history.len() as u32;
        let wins = profile.history.iter().filter(|r| r.is_win()).count() as u32;

        profile.games_played = games;
        profile.total_score = profile.history.iter().map(|r| r.score).sum();
        profile.win_rate = if games == 0 {
            0.0
        } else {
            wins as f64 / games as f64
        };

        let mut update = ProgressUpdate::default();

        for milestone in reached_milestones(profile) {
            if profile.milestones.unlock(milestone) {
                update.milestones.push(milestone);
            }
        }

        if let Some(newest) = profile.history.last() {
            let met: Vec<Achievement> = self
                .rules
                .iter()
                .filter(|rule| rule.is_met(profile, newest))
                .map(|rule| rule.achievement())
                .collect();
            for achievement in met {
                if profile.achievements.unlock(achievement) {
                    update.achievements.push(achievement);
                }
            }
        }

        update
    }
}

fn reached_milestones(profile: &UserProfile) -> Vec<Milestone> {
    let played = |tier: Difficulty| profile.history.iter().any(|r| r.difficulty == tier);

    [
        (
            Milestone::Over10Score,
            profile.total_score >= GameConfig::SCORE_MILESTONE_LOW,
        ),
        (
            Milestone::Over20Score,
            profile.total_score >= GameConfig::SCORE_MILESTONE_MID,
        ),
        (
            Milestone::Over50Score,
            profile.total_score >= GameConfig::SCORE_MILESTONE_HIGH,
        ),
        (Milestone::FirstEasyPlayed, played(Difficulty::Easy)),
        (Milestone::FirstMediumPlayed, played(Difficulty::Medium)),
        (Milestone::FirstHardPlayed, played(Difficulty::Hard)),
    ]
    .into_iter()
    .filter_map(|(milestone, reached)| reached.then_some(milestone))
    .collect()
}
