//! League-calibrated per-game benchmarks against which radar attributes are normalised. A player
//! matching a benchmark scores the full mark on the corresponding component.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GOALS_PER_GAME: f64 = 0.35;
pub const PASSES_PER_GAME: f64 = 35.0;
pub const ASSISTS_PER_GAME: f64 = 0.15;
pub const TACKLES_PER_GAME: f64 = 1.5;
pub const CLEAN_SHEETS_PER_GAME: f64 = 0.3;
pub const GOAL_INVOLVEMENTS_PER_GAME: f64 = 0.4;
pub const DUELS_PER_GAME: f64 = 14.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Benchmarks {
    pub goals_per_game: f64,
    pub passes_per_game: f64,
    pub assists_per_game: f64,
    pub tackles_per_game: f64,
    pub clean_sheets_per_game: f64,
    pub goal_involvements_per_game: f64,
    pub duels_per_game: f64,
}
impl Benchmarks {
    pub const DEFAULT: Benchmarks = Benchmarks {
        goals_per_game: GOALS_PER_GAME,
        passes_per_game: PASSES_PER_GAME,
        assists_per_game: ASSISTS_PER_GAME,
        tackles_per_game: TACKLES_PER_GAME,
        clean_sheets_per_game: CLEAN_SHEETS_PER_GAME,
        goal_involvements_per_game: GOAL_INVOLVEMENTS_PER_GAME,
        duels_per_game: DUELS_PER_GAME,
    };

    fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("goals_per_game", self.goals_per_game),
            ("passes_per_game", self.passes_per_game),
            ("assists_per_game", self.assists_per_game),
            ("tackles_per_game", self.tackles_per_game),
            ("clean_sheets_per_game", self.clean_sheets_per_game),
            ("goal_involvements_per_game", self.goal_involvements_per_game),
            ("duels_per_game", self.duels_per_game),
        ]
    }

    pub fn validate(&self) -> Result<(), InvalidBenchmarks> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(InvalidBenchmarks::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(InvalidBenchmarks::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidBenchmarks {
    #[error("benchmark {name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("benchmark {name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
}
