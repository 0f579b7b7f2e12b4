//! Per-game rates derived from season totals, for display alongside the raw counters.

use serde::Serialize;

use crate::norm::{round_half_up, round_to};
use crate::stats::PlayerStats;

pub const RATE_DECIMALS: i32 = 2;

/// Regulation length of a match. Minutes per game never exceed it, even when extra time inflates
/// the season total.
pub const MATCH_MINUTES: u32 = 90;

/// A sending-off weighs as much as this many bookings.
pub const RED_CARD_DISCIPLINE_WEIGHT: u64 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub goals_per_game: f64,
    pub assists_per_game: f64,
    pub minutes_per_game: u32,
    /// Percentage of appearances that ended with a clean sheet.
    pub clean_sheet_rate: u64,
    /// Season total; lower is better.
    pub discipline_score: u64,
}

/// All rates are zero for a player without appearances.
pub fn derived_stats(stats: &PlayerStats) -> DerivedStats {
    if stats.is_unplayed() {
        return DerivedStats::default();
    }
    let minutes_per_game = round_half_up(stats.per_game(stats.minutes_played)) as u32;
    DerivedStats {
        goals_per_game: round_to(stats.per_game(stats.goals), RATE_DECIMALS),
        assists_per_game: round_to(stats.per_game(stats.assists), RATE_DECIMALS),
        minutes_per_game: u32::min(MATCH_MINUTES, minutes_per_game),
        clean_sheet_rate: round_half_up(stats.per_game(stats.clean_sheets) * 100.0) as u64,
        discipline_score: stats.yellow_cards as u64
            + stats.red_cards as u64 * RED_CARD_DISCIPLINE_WEIGHT,
    }
}
