//! Testing helpers.

use tinyrand::Rand;

use crate::stats::PlayerStats;

pub const SEED: u64 = 42;

/// Striker's season used throughout the tests.
pub fn striker() -> PlayerStats {
    PlayerStats {
        appearances: 20,
        goals: 6,
        assists: 3,
        shots: 40,
        shots_on_goal: 18,
        passes: 300,
        tackles: 25,
        duels: 200,
        ..PlayerStats::default()
    }
}

pub fn centre_back() -> PlayerStats {
    PlayerStats {
        appearances: 30,
        assists: 1,
        yellow_cards: 6,
        red_cards: 1,
        clean_sheets: 12,
        minutes_played: 2_655,
        shots: 2,
        passes: 1_500,
        tackles: 70,
        duels: 500,
        ..PlayerStats::default()
    }
}

pub fn goalkeeper() -> PlayerStats {
    PlayerStats {
        appearances: 34,
        clean_sheets: 14,
        minutes_played: 3_060,
        yellow_cards: 1,
        passes: 600,
        tackles: 2,
        duels: 40,
        ..PlayerStats::default()
    }
}

/// Every counter pinned at `u32::MAX`, for checking that the calculators neither overflow nor
/// escape their bounds.
pub fn saturated(appearances: u32) -> PlayerStats {
    PlayerStats {
        appearances,
        goals: u32::MAX,
        assists: u32::MAX,
        yellow_cards: u32::MAX,
        red_cards: u32::MAX,
        clean_sheets: u32::MAX,
        minutes_played: u32::MAX,
        shots: u32::MAX,
        shots_on_goal: u32::MAX,
        passes: u32::MAX,
        tackles: u32::MAX,
        duels: u32::MAX,
    }
}

fn below(rand: &mut impl Rand, limit: u32) -> u32 {
    (rand.next_u64() % (limit as u64 + 1)) as u32
}

/// A season with between one and `max_appearances` appearances and every other counter drawn
/// independently. Counters are not mutually consistent (e.g., shots on goal may exceed shots),
/// which suits invariants that must hold for any input.
pub fn random_stats(rand: &mut impl Rand, max_appearances: u32) -> PlayerStats {
    let appearances = 1 + below(rand, max_appearances - 1);
    PlayerStats {
        appearances,
        goals: below(rand, appearances * 2),
        assists: below(rand, appearances * 2),
        yellow_cards: below(rand, appearances),
        red_cards: below(rand, appearances / 4),
        clean_sheets: below(rand, appearances),
        minutes_played: below(rand, appearances * 120),
        shots: below(rand, appearances * 6),
        shots_on_goal: below(rand, appearances * 3),
        passes: below(rand, appearances * 90),
        tackles: below(rand, appearances * 5),
        duels: below(rand, appearances * 30),
    }
}

/// Asserts that `value` carries no more than `decimals` decimal places.
pub fn assert_decimals(value: f64, decimals: i32) {
    let scaled = value * 10f64.powi(decimals);
    assert!(
        (scaled - scaled.round()).abs() < 1e-6,
        "{value} has more than {decimals} decimal places"
    );
}
