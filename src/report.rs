//! Bundles the four calculators behind a validated calibration, and rolls individual reports up
//! into squad-level views.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::benchmark::{Benchmarks, InvalidBenchmarks};
use crate::derived::{derived_stats, DerivedStats};
use crate::form::{classify_form, PlayerFormData};
use crate::norm::round_to;
use crate::radar::RadarProfile;
use crate::rating::{match_rating, RATING_DECIMALS};
use crate::stats::{PlayerStats, Position};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub position: Position,
    pub radar: RadarProfile,
    pub rating: f64,
    pub derived: DerivedStats,
    pub form: PlayerFormData,
}

/// Computes player analytics against a fixed set of [Benchmarks]. The benchmarks are validated
/// once, on construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analyser {
    benchmarks: Benchmarks,
}
impl Analyser {
    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    pub fn radar_profile(&self, stats: &PlayerStats) -> RadarProfile {
        RadarProfile::compute(stats, &self.benchmarks)
    }

    pub fn match_rating(&self, stats: &PlayerStats, position: Position) -> f64 {
        match_rating(stats, position)
    }

    pub fn derived_stats(&self, stats: &PlayerStats) -> DerivedStats {
        derived_stats(stats)
    }

    pub fn form(&self, stats: &PlayerStats) -> PlayerFormData {
        classify_form(stats)
    }

    pub fn report(&self, stats: &PlayerStats, position: Position) -> PlayerReport {
        let report = PlayerReport {
            position,
            radar: self.radar_profile(stats),
            rating: self.match_rating(stats, position),
            derived: self.derived_stats(stats),
            form: self.form(stats),
        };
        trace!("{position} {stats:?}: radar: {}, rating: {}", report.radar, report.rating);
        report
    }

    pub fn analyse_squad(&self, squad: &Squad) -> SquadReport {
        let players: Vec<_> = squad
            .players
            .iter()
            .map(|entry| SquadPlayerReport {
                name: entry.name.clone(),
                report: self.report(&entry.stats, entry.position),
            })
            .collect();
        let unplayed = squad
            .players
            .iter()
            .filter(|entry| entry.stats.is_unplayed())
            .count();
        debug!(
            "analysed {} players ({unplayed} without appearances)",
            players.len()
        );
        SquadReport { players }
    }
}

impl TryFrom<Benchmarks> for Analyser {
    type Error = InvalidBenchmarks;

    fn try_from(benchmarks: Benchmarks) -> Result<Self, Self::Error> {
        benchmarks.validate()?;
        Ok(Self { benchmarks })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadEntry {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub players: Vec<SquadEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadPlayerReport {
    pub name: String,
    #[serde(flatten)]
    pub report: PlayerReport,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SquadReport {
    pub players: Vec<SquadPlayerReport>,
}
impl SquadReport {
    /// Players by descending match rating. Ties go to the higher form score, then alphabetically
    /// by name.
    pub fn leaderboard(&self) -> Vec<&SquadPlayerReport> {
        let mut ranked: Vec<_> = self.players.iter().collect();
        ranked.sort_by(|a, b| compare_standing(a, b));
        ranked
    }

    /// Mean match rating of each position represented in the squad, in [Position] order.
    pub fn position_averages(&self) -> Vec<(Position, f64)> {
        let mut totals: FxHashMap<Position, (f64, usize)> = FxHashMap::default();
        for player in &self.players {
            let (sum, count) = totals.entry(player.report.position).or_default();
            *sum += player.report.rating;
            *count += 1;
        }
        let mut averages: Vec<_> = totals
            .into_iter()
            .map(|(position, (sum, count))| {
                (position, round_to(sum / count as f64, RATING_DECIMALS))
            })
            .collect();
        averages.sort_by_key(|&(position, _)| position);
        averages
    }
}

fn compare_standing(a: &SquadPlayerReport, b: &SquadPlayerReport) -> Ordering {
    b.report
        .rating
        .total_cmp(&a.report.rating)
        .then_with(|| b.report.form.form_score.total_cmp(&a.report.form.form_score))
        .then_with(|| a.name.cmp(&b.name))
}
