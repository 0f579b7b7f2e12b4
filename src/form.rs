//! Qualitative form, classified by goal-involvement density. Goals count double.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::norm::round_to;
use crate::stats::PlayerStats;

pub const GOAL_FORM_WEIGHT: u64 = 2;
pub const FORM_SCORE_DECIMALS: i32 = 2;

/// Lower bounds (exclusive) of form scores, checked from the top.
pub const HOT_THRESHOLD: f64 = 1.5;
pub const GOOD_THRESHOLD: f64 = 0.8;
pub const AVERAGE_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Hot,
    Good,
    Average,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFormData {
    pub form: Form,
    pub form_score: f64,
    pub trend: Trend,
}
impl PlayerFormData {
    pub fn unrated() -> Self {
        Self {
            form: Form::Average,
            form_score: 0.0,
            trend: Trend::Stable,
        }
    }

    pub fn from_score(form_score: f64) -> Self {
        let (form, trend) = if form_score > HOT_THRESHOLD {
            (Form::Hot, Trend::Up)
        } else if form_score > GOOD_THRESHOLD {
            (Form::Good, Trend::Stable)
        } else if form_score > AVERAGE_THRESHOLD {
            (Form::Average, Trend::Stable)
        } else {
            (Form::Cold, Trend::Down)
        };
        Self {
            form,
            form_score,
            trend,
        }
    }
}

/// A player without appearances is [unrated](PlayerFormData::unrated): average and stable, but
/// with a zero score.
pub fn classify_form(stats: &PlayerStats) -> PlayerFormData {
    if stats.is_unplayed() {
        return PlayerFormData::unrated();
    }
    let weighted = stats.goals as u64 * GOAL_FORM_WEIGHT + stats.assists as u64;
    PlayerFormData::from_score(round_to(stats.per_game(weighted), FORM_SCORE_DECIMALS))
}
