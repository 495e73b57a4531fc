//! One-way progress flags.
//!
//! The fields stay public so stored profiles map one-to-one onto JSON, but
//! game code only changes them through `unlock`, which never clears a flag.

/// Milestones tied to cumulative score or tier exposure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Milestone {
    Over10Score,
    Over20Score,
    Over50Score,
    FirstEasyPlayed,
    FirstMediumPlayed,
    FirstHardPlayed,
}

impl Milestone {
    pub const ALL: [Milestone; 6] = [
        Milestone::Over10Score,
        Milestone::Over20Score,
        Milestone::Over50Score,
        Milestone::FirstEasyPlayed,
        Milestone::FirstMediumPlayed,
        Milestone::FirstHardPlayed,
    ];

    /// Player-facing description.
    pub const fn title(self) -> &'static str {
        match self {
            Milestone::Over10Score => "Scored over 10 points",
            Milestone::Over20Score => "Scored over 20 points",
            Milestone::Over50Score => "Scored over 50 points",
            Milestone::FirstEasyPlayed => "Played a game on Easy",
            Milestone::FirstMediumPlayed => "Played a game on Medium",
            Milestone::FirstHardPlayed => "Played a game on Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Milestones {
    pub over10_score: bool,
    pub over20_score: bool,
    pub over50_score: bool,
    pub first_easy_played: bool,
    pub first_medium_played: bool,
    pub first_hard_played: bool,
}

impl Milestones {
    pub fn is_unlocked(&self, milestone: Milestone) -> bool {
        match milestone {
            Milestone::Over10Score => self.over10_score,
            Milestone::Over20Score => self.over20_score,
            Milestone::Over50Score => self.over50_score,
            Milestone::FirstEasyPlayed => self.first_easy_played,
            Milestone::FirstMediumPlayed => self.first_medium_played,
            Milestone::FirstHardPlayed => self.first_hard_played,
        }
    }

    /// Sets the flag. Returns `true` if it was previously unset.
    pub fn unlock(&mut self, milestone: Milestone) -> bool {
        let flag = match milestone {
            Milestone::Over10Score => &mut self.over10_score,
            Milestone::Over20Score => &mut self.over20_score,
            Milestone::Over50Score => &mut self.over50_score,
            Milestone::FirstEasyPlayed => &mut self.first_easy_played,
            Milestone::FirstMediumPlayed => &mut self.first_medium_played,
            Milestone::FirstHardPlayed => &mut self.first_hard_played,
        };
        !core::mem::replace(flag, true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Milestone, bool)> + '_ {
        Milestone::ALL.into_iter().map(|m| (m, self.is_unlocked(m)))
    }

    pub fn count(&self) -> usize {
        self.iter().filter(|(_, unlocked)| *unlocked).count()
    }
}

/// Achievements tied to specific gameplay conditions.
///
/// The unlock conditions live in [`crate::progression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Achievement {
    ExplorersFirstStep,
    StrategicThinker,
    PersistentPlayer,
    CuriousMind,
    PrecisionTraining,
    QuickLearner,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::ExplorersFirstStep,
        Achievement::StrategicThinker,
        Achievement::PersistentPlayer,
        Achievement::CuriousMind,
        Achievement::PrecisionTraining,
        Achievement::QuickLearner,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Achievement::ExplorersFirstStep => "Explorer's First Step",
            Achievement::StrategicThinker => "Strategic Thinker",
            Achievement::PersistentPlayer => "Persistent Player",
            Achievement::CuriousMind => "Curious Mind",
            Achievement::PrecisionTraining => "Precision Training",
            Achievement::QuickLearner => "Quick Learner",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Achievements {
    pub explorers_first_step: bool,
    pub strategic_thinker: bool,
    pub persistent_player: bool,
    pub curious_mind: bool,
    pub precision_training: bool,
    pub quick_learner: bool,
}

impl Achievements {
    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        match achievement {
            Achievement::ExplorersFirstStep => self.explorers_first_step,
            Achievement::StrategicThinker => self.strategic_thinker,
            Achievement::PersistentPlayer => self.persistent_player,
            Achievement::CuriousMind => self.curious_mind,
            Achievement::PrecisionTraining => self.precision_training,
            Achievement::QuickLearner => self.quick_learner,
        }
    }

    /// Sets the flag. Returns `true` if it was previously unset.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        let flag = match achievement {
            Achievement::ExplorersFirstStep => &mut self.explorers_first_step,
            Achievement::StrategicThinker => &mut self.strategic_thinker,
            Achievement::PersistentPlayer => &mut self.persistent_player,
            Achievement::CuriousMind => &mut self.curious_mind,
            Achievement::PrecisionTraining => &mut self.precision_training,
            Achievement::QuickLearner => &mut self.quick_learner,
        };
        !core::mem::replace(flag, true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Achievement, bool)> + '_ {
        Achievement::ALL
            .into_iter()
            .map(|a| (a, self.is_unlocked(a)))
    }

    pub fn count(&self) -> usize {
        self.iter().filter(|(_, unlocked)| *unlocked).count()
    }
}
