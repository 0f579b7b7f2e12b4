//! Match rating on the familiar 1–10 scale. A base rating of [BASE_RATING] is adjusted by
//! per-game contributions and discipline, plus a bonus for the contribution most associated
//! with the player's position.

use std::ops::RangeInclusive;

use crate::norm::{clamp, round_to};
use crate::stats::{PlayerStats, Position};

pub const BASE_RATING: f64 = 6.0;
pub const RATING_BOUNDS: RangeInclusive<f64> = 4.5..=10.0;
pub const RATING_DECIMALS: i32 = 1;

pub const GOAL_WEIGHT: f64 = 1.5;
pub const ASSIST_WEIGHT: f64 = 1.0;
pub const CLEAN_SHEET_WEIGHT: f64 = 0.5;
pub const YELLOW_CARD_PENALTY: f64 = 0.3;
pub const RED_CARD_PENALTY: f64 = 1.0;

pub const GOALKEEPER_CLEAN_SHEET_BONUS: f64 = 2.0;
pub const DEFENDER_CLEAN_SHEET_BONUS: f64 = 1.5;
pub const MIDFIELDER_ASSIST_BONUS: f64 = 1.5;
pub const FORWARD_GOAL_BONUS: f64 = 2.0;

impl Position {
    /// Extra rating credited for the position's signature contribution. Requires at least one
    /// appearance.
    pub fn rating_bonus(&self, stats: &PlayerStats) -> f64 {
        match self {
            Position::Goalkeeper => {
                stats.per_game(stats.clean_sheets) * GOALKEEPER_CLEAN_SHEET_BONUS
            }
            Position::Defender => stats.per_game(stats.clean_sheets) * DEFENDER_CLEAN_SHEET_BONUS,
            Position::Midfielder => stats.per_game(stats.assists) * MIDFIELDER_ASSIST_BONUS,
            Position::Forward => stats.per_game(stats.goals) * FORWARD_GOAL_BONUS,
        }
    }
}

/// Rating in [RATING_BOUNDS], to one decimal place. A player without appearances rates exactly
/// [BASE_RATING].
pub fn match_rating(stats: &PlayerStats, position: Position) -> f64 {
    if stats.is_unplayed() {
        return BASE_RATING;
    }
    let base = BASE_RATING
        + stats.per_game(stats.goals) * GOAL_WEIGHT
        + stats.per_game(stats.assists) * ASSIST_WEIGHT
        + stats.per_game(stats.clean_sheets) * CLEAN_SHEET_WEIGHT
        - stats.per_game(stats.yellow_cards) * YELLOW_CARD_PENALTY
        - stats.per_game(stats.red_cards) * RED_CARD_PENALTY;
    let rating = base + position.rating_bonus(stats);
    round_to(clamp(rating, &RATING_BOUNDS), RATING_DECIMALS)
}
