//! Five-axis radar profile. Each axis scores a player's season against a per-game
//! [Benchmarks] figure and is bounded so that the chart never collapses to the centre or
//! saturates its rim.

use std::array;
use std::fmt;
use std::ops::{Index, RangeInclusive};

use ordinalizer::Ordinal;
use serde::Serialize;
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::benchmark::Benchmarks;
use crate::norm::{clamp, normalize, round_half_up};
use crate::stats::PlayerStats;

/// Value assigned to every axis of a player without appearances. Signals an insufficient sample
/// rather than average performance.
pub const NEUTRAL_VALUE: u8 = 50;

pub const FULL_MARK: u8 = 100;

/// Shot accuracy assumed for a player who has not taken a shot.
pub const NEUTRAL_SHOT_ACCURACY: f64 = 50.0;

pub const SHOT_ACCURACY_WEIGHT: f64 = 0.4;
pub const SCORING_WEIGHT: f64 = 0.6;
pub const PASS_VOLUME_WEIGHT: f64 = 0.7;
pub const CREATIVITY_WEIGHT: f64 = 0.3;
pub const TACKLING_WEIGHT: f64 = 0.6;
pub const CLEAN_SHEET_WEIGHT: f64 = 0.4;

pub const DEFAULT_BOUNDS: RangeInclusive<f64> = 20.0..=95.0;
pub const PASSING_BOUNDS: RangeInclusive<f64> = 25.0..=95.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ordinal, EnumCount, EnumIter, Display, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Shooting,
    Passing,
    Defense,
    Attack,
    Duels,
}

pub const ATTRIBUTES: [Attribute; Attribute::COUNT] = [
    Attribute::Shooting,
    Attribute::Passing,
    Attribute::Defense,
    Attribute::Attack,
    Attribute::Duels,
];

impl Attribute {
    pub fn subject(&self) -> &'static str {
        match self {
            Attribute::Shooting => "Shooting",
            Attribute::Passing => "Passing",
            Attribute::Defense => "Defense",
            Attribute::Attack => "Attack",
            Attribute::Duels => "Duels",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Attribute::Shooting => "Shot accuracy and goals per game",
            Attribute::Passing => "Passes and assists per game",
            Attribute::Defense => "Tackles and clean sheets per game",
            Attribute::Attack => "Goal involvements per game",
            Attribute::Duels => "Duels contested per game",
        }
    }

    pub fn bounds(&self) -> &'static RangeInclusive<f64> {
        match self {
            Attribute::Passing => &PASSING_BOUNDS,
            _ => &DEFAULT_BOUNDS,
        }
    }

    /// Unrounded score for this axis. Requires at least one appearance.
    fn score(&self, stats: &PlayerStats, benchmarks: &Benchmarks) -> f64 {
        let raw = match self {
            Attribute::Shooting => {
                let shot_accuracy = if stats.shots > 0 {
                    stats.shots_on_goal as f64 / stats.shots as f64 * 100.0
                } else {
                    NEUTRAL_SHOT_ACCURACY
                };
                let scoring = normalize(stats.per_game(stats.goals), benchmarks.goals_per_game);
                shot_accuracy * SHOT_ACCURACY_WEIGHT + scoring * SCORING_WEIGHT
            }
            Attribute::Passing => {
                let volume = normalize(stats.per_game(stats.passes), benchmarks.passes_per_game);
                let creativity =
                    normalize(stats.per_game(stats.assists), benchmarks.assists_per_game);
                volume * PASS_VOLUME_WEIGHT + creativity * CREATIVITY_WEIGHT
            }
            Attribute::Defense => {
                let tackling = normalize(stats.per_game(stats.tackles), benchmarks.tackles_per_game);
                let clean_sheets = normalize(
                    stats.per_game(stats.clean_sheets),
                    benchmarks.clean_sheets_per_game,
                );
                tackling * TACKLING_WEIGHT + clean_sheets * CLEAN_SHEET_WEIGHT
            }
            Attribute::Attack => normalize(
                stats.per_game(stats.goal_involvements()),
                benchmarks.goal_involvements_per_game,
            ),
            Attribute::Duels => normalize(stats.per_game(stats.duels), benchmarks.duels_per_game),
        };
        clamp(raw, self.bounds())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarData {
    pub key: Attribute,
    pub subject: &'static str,
    pub value: u8,
    pub full_mark: u8,
    pub description: &'static str,
}
impl RadarData {
    fn new(key: Attribute, value: u8) -> Self {
        Self {
            key,
            subject: key.subject(),
            value,
            full_mark: FULL_MARK,
            description: key.description(),
        }
    }
}

/// The five radar axes, always in [Attribute] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RadarProfile([RadarData; Attribute::COUNT]);
impl RadarProfile {
    pub fn neutral() -> Self {
        Self::from_values([NEUTRAL_VALUE; Attribute::COUNT])
    }

    pub fn compute(stats: &PlayerStats, benchmarks: &Benchmarks) -> Self {
        if stats.is_unplayed() {
            return Self::neutral();
        }
        Self::from_values(
            ATTRIBUTES.map(|attribute| round_half_up(attribute.score(stats, benchmarks)) as u8),
        )
    }

    fn from_values(values: [u8; Attribute::COUNT]) -> Self {
        Self(array::from_fn(|index| RadarData::new(ATTRIBUTES[index], values[index])))
    }

    pub fn value(&self, attribute: Attribute) -> u8 {
        self[attribute].value
    }

    pub fn values(&self) -> [u8; Attribute::COUNT] {
        array::from_fn(|index| self.0[index].value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadarData> {
        self.0.iter()
    }

    /// Signed per-axis difference of `self` over `other`, in [Attribute] order. Positive entries
    /// mark the axes on which `self` is stronger.
    pub fn compare(&self, other: &RadarProfile) -> [i16; Attribute::COUNT] {
        let mut deltas = [0; Attribute::COUNT];
        for (index, (ours, theirs)) in self.0.iter().zip(other.0.iter()).enumerate() {
            deltas[index] = ours.value as i16 - theirs.value as i16;
        }
        deltas
    }
}

impl Index<Attribute> for RadarProfile {
    type Output = RadarData;

    fn index(&self, attribute: Attribute) -> &Self::Output {
        &self.0[attribute.ordinal()]
    }
}

impl AsRef<[RadarData]> for RadarProfile {
    fn as_ref(&self) -> &[RadarData] {
        &self.0
    }
}

impl fmt::Display for RadarProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, data) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", data.key, data.value)?;
        }
        write!(f, "]")
    }
}

/// Radar profile under the default calibration.
pub fn radar_profile(stats: &PlayerStats) -> RadarProfile {
    RadarProfile::compute(stats, &Benchmarks::DEFAULT)
}
