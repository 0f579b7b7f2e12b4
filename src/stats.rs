//! Raw season statistics, as supplied by the stats provider, and the playing positions used to
//! weight match ratings.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// A season-aggregate snapshot of a player's counting stats. Counters that the provider omits (or
/// sends as `null`) decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub appearances: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub goals: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub assists: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub yellow_cards: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub red_cards: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub clean_sheets: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub minutes_played: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub shots: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub shots_on_goal: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub passes: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub tackles: u32,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub duels: u32,
}
impl PlayerStats {
    /// `true` if the player has not featured, in which case every calculator returns its neutral
    /// default rather than a computed value.
    #[inline]
    pub fn is_unplayed(&self) -> bool {
        self.appearances == 0
    }

    /// Converts a season total into a per-appearance rate. Callers must have ruled out
    /// [`is_unplayed`](Self::is_unplayed) first.
    #[inline]
    pub fn per_game(&self, total: impl Into<u64>) -> f64 {
        debug_assert!(self.appearances > 0, "per-game rate requires at least one appearance");
        total.into() as f64 / self.appearances as f64
    }

    /// Goals plus assists. Widened so that the sum of two saturated counters cannot overflow.
    #[inline]
    pub fn goal_involvements(&self) -> u64 {
        self.goals as u64 + self.assists as u64
    }
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Parses a position key, as sent by the provider (e.g., `"midfielder"`). Matching is
/// case-insensitive and ignores surrounding whitespace.
impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Position::iter()
            .find(|position| position.to_string() == key)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown position key '{0}'")]
pub struct ParsePositionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_absent_and_null_as_zero() {
        let stats: PlayerStats =
            serde_json::from_str(r#"{"appearances":12,"goals":null,"shotsOnGoal":7}"#).unwrap();
        assert_eq!(
            PlayerStats {
                appearances: 12,
                shots_on_goal: 7,
                ..PlayerStats::default()
            },
            stats
        );
    }

    #[test]
    fn decode_empty_object() {
        let stats: PlayerStats = serde_json::from_str("{}").unwrap();
        assert_eq!(PlayerStats::default(), stats);
        assert!(stats.is_unplayed());
    }

    #[test]
    fn decode_rejects_negative() {
        assert!(serde_json::from_str::<PlayerStats>(r#"{"goals":-1}"#).is_err());
    }

    #[test]
    fn encode_camel_case() {
        let stats = PlayerStats {
            yellow_cards: 2,
            ..PlayerStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""yellowCards":2"#), "{json}");
        assert!(json.contains(r#""minutesPlayed":0"#), "{json}");
    }

    #[test]
    fn per_game() {
        let stats = PlayerStats {
            appearances: 4,
            goals: 3,
            assists: 1,
            ..PlayerStats::default()
        };
        assert_eq!(0.75, stats.per_game(stats.goals));
        assert_eq!(4, stats.goal_involvements());
        assert!(!stats.is_unplayed());
    }

    #[test]
    fn goal_involvements_do_not_overflow() {
        let stats = PlayerStats {
            appearances: 1,
            goals: u32::MAX,
            assists: u32::MAX,
            ..PlayerStats::default()
        };
        assert_eq!(2 * u32::MAX as u64, stats.goal_involvements());
        assert_eq!(2.0 * u32::MAX as f64, stats.per_game(stats.goal_involvements()));
    }

    #[test]
    fn position_round_trips_through_display() {
        for position in Position::iter() {
            assert_eq!(Ok(position), position.to_string().parse());
        }
    }

    #[test]
    fn position_parse_lenient() {
        assert_eq!(Ok(Position::Goalkeeper), " Goalkeeper ".parse());
        assert_eq!(
            Err(ParsePositionError("winger".into())),
            "winger".parse::<Position>()
        );
    }

    #[test]
    fn position_serde() {
        assert_eq!(r#""forward""#, serde_json::to_string(&Position::Forward).unwrap());
        assert_eq!(
            Position::Defender,
            serde_json::from_str::<Position>(r#""defender""#).unwrap()
        );
    }
}
