//! Color universe and per-tier difficulty configuration.
//!
//! A [`Difficulty`] fixes three things: the palette the hidden sequence is
//! drawn from, how many slots the sequence has, and the score multiplier for
//! each correct slot. All lookups are pure and infallible.

use core::str::FromStr;

use crate::round::RoundError;

/// A block color.
///
/// Colors compare by identity; two colors are equal only if they are the same
/// variant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl Color {
    /// Every color known to the game.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
    ];

    /// Parses a color name (case-insensitive).
    pub fn parse(name: &str) -> Result<Self, RoundError> {
        Self::from_str(name.trim()).map_err(|_| RoundError::UnknownColor {
            name: name.to_owned(),
        })
    }
}

/// Difficulty tier selected before a round starts.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

const EASY_PALETTE: [Color; 2] = [Color::Cyan, Color::Blue];
const MEDIUM_PALETTE: [Color; 3] = [Color::Red, Color::Orange, Color::Yellow];
const HARD_PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Purple];

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parses a tier name (case-insensitive), rejecting anything else.
    pub fn parse(name: &str) -> Result<Self, RoundError> {
        Self::from_str(name.trim()).map_err(|_| RoundError::UnknownDifficulty {
            name: name.to_owned(),
        })
    }

    /// Colors a hidden sequence of this tier may contain. No duplicates.
    pub const fn palette(self) -> &'static [Color] {
        match self {
            Difficulty::Easy => &EASY_PALETTE,
            Difficulty::Medium => &MEDIUM_PALETTE,
            Difficulty::Hard => &HARD_PALETTE,
        }
    }

    /// Number of hidden slots in a round of this tier.
    pub const fn slot_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Points awarded per correctly placed color.
    pub const fn score_multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Whether `color` belongs to this tier's palette.
    pub fn allows(self, color: Color) -> bool {
        self.palette().contains(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn palettes_are_distinct_and_cover_slots() {
        for tier in Difficulty::ALL {
            let palette = tier.palette();
            assert!(palette.len() >= tier.slot_count());
            assert!(tier.slot_count() <= GameConfig::MAX_SLOTS);
            for (i, a) in palette.iter().enumerate() {
                assert!(!palette[i + 1..].contains(a), "{tier} repeats {a}");
            }
        }
    }

    #[test]
    fn tier_table() {
        assert_eq!(Difficulty::Easy.palette().len(), 2);
        assert_eq!(Difficulty::Medium.palette().len(), 3);
        assert_eq!(Difficulty::Hard.palette().len(), 4);
        assert_eq!(Difficulty::Easy.slot_count(), 2);
        assert_eq!(Difficulty::Medium.slot_count(), 3);
        assert_eq!(Difficulty::Hard.slot_count(), 4);
        assert_eq!(Difficulty::Easy.score_multiplier(), 1);
        assert_eq!(Difficulty::Medium.score_multiplier(), 2);
        assert_eq!(Difficulty::Hard.score_multiplier(), 3);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Difficulty::parse("HARD").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::parse(" easy ").unwrap(), Difficulty::Easy);
        assert_eq!(Color::parse("Cyan").unwrap(), Color::Cyan);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            Difficulty::parse("expert"),
            Err(RoundError::UnknownDifficulty { .. })
        ));
        assert!(matches!(
            Color::parse("magenta"),
            Err(RoundError::UnknownColor { .. })
        ));
    }

    #[test]
    fn default_tier_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
