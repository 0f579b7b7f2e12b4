//! Deterministic player performance analytics. Converts a player's season-aggregate counting
//! stats into a five-axis radar profile, a match rating, per-game rates and a form
//! classification, each normalised against league-calibrated benchmarks.

pub mod benchmark;
pub mod derived;
pub mod file;
pub mod form;
pub mod norm;
pub mod print;
pub mod radar;
pub mod rating;
pub mod report;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
