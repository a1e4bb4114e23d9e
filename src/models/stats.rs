//! Derived statistics value objects.
//!
//! Everything here is recomputed from a match snapshot and discarded; nothing
//! is persisted or incrementally updated. The computations that produce these
//! live in [`crate::calculate`].

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::TeamId;

/// Outcome of a single match from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win => write!(f, "W"),
            GameOutcome::Loss => write!(f, "L"),
        }
    }
}

/// Consecutive identical outcomes ending at the most recent game.
///
/// Renders as the short-form descriptor used in standings tables: `"W3"`,
/// `"L2"`, or `"-"` for a team with no finished games, and serializes as that
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streak {
    None,
    Win(u32),
    Loss(u32),
}

impl Streak {
    /// Build a streak from an outcome and run length; a zero-length run is
    /// no streak at all.
    pub fn of(outcome: GameOutcome, count: u32) -> Self {
        if count == 0 {
            return Streak::None;
        }
        match outcome {
            GameOutcome::Win => Streak::Win(count),
            GameOutcome::Loss => Streak::Loss(count),
        }
    }

    /// Run length, 0 when there is no streak.
    pub fn count(&self) -> u32 {
        match self {
            Streak::None => 0,
            Streak::Win(n) | Streak::Loss(n) => *n,
        }
    }

    /// Outcome the run is made of, if any.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Streak::None => None,
            Streak::Win(_) => Some(GameOutcome::Win),
            Streak::Loss(_) => Some(GameOutcome::Loss),
        }
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Streak::None => write!(f, "-"),
            Streak::Win(n) => write!(f, "W{}", n),
            Streak::Loss(n) => write!(f, "L{}", n),
        }
    }
}

/// Error returned when a streak descriptor string is malformed.
#[derive(Debug, Error)]
#[error("invalid streak descriptor: {0:?}")]
pub struct ParseStreakError(String);

impl FromStr for Streak {
    type Err = ParseStreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Streak::None);
        }
        let (outcome, digits) = if let Some(rest) = s.strip_prefix('W') {
            (GameOutcome::Win, rest)
        } else if let Some(rest) = s.strip_prefix('L') {
            (GameOutcome::Loss, rest)
        } else {
            return Err(ParseStreakError(s.to_string()));
        };
        let count: u32 = digits.parse().map_err(|_| ParseStreakError(s.to_string()))?;
        if count == 0 {
            return Err(ParseStreakError(s.to_string()));
        }
        Ok(Streak::of(outcome, count))
    }
}

impl Serialize for Streak {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Streak {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Win/loss split, e.g. a home or away record. Renders as `"3-1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
}

impl WinLossRecord {
    /// Count one result toward this record.
    pub fn add(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
        }
    }
}

impl fmt::Display for WinLossRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// A team's row in the standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Team this row belongs to
    pub team_id: TeamId,

    /// Team display name
    pub team_name: String,

    /// Finished games counted
    pub played: u32,

    /// Wins
    pub won: u32,

    /// Losses
    pub lost: u32,

    /// won / played (0.0 to 1.0), 0 when no games
    pub win_percentage: f64,

    /// Points scored across counted games
    pub points_for: u32,

    /// Points conceded across counted games
    pub points_against: u32,

    /// points_for - points_against, may be negative
    pub points_diff: i32,

    /// Trailing run over the most recent games (short window)
    pub streak: Streak,
}

/// Richer per-team record: everything a Standing carries plus averages,
/// side splits, and the recent form guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Team this record belongs to
    pub team_id: TeamId,

    /// Team display name
    pub team_name: String,

    /// Finished games counted
    pub played: u32,

    /// Wins
    pub won: u32,

    /// Losses
    pub lost: u32,

    /// won / played (0.0 to 1.0), 0 when no games
    pub win_percentage: f64,

    /// Points scored across counted games
    pub points_for: u32,

    /// Points conceded across counted games
    pub points_against: u32,

    /// points_for - points_against, may be negative
    pub points_diff: i32,

    /// Mean points scored per game, 0 when no games
    pub avg_points_scored: f64,

    /// Mean points conceded per game, 0 when no games
    pub avg_points_conceded: f64,

    /// Win/loss split for games where this team was the home side
    pub home_record: WinLossRecord,

    /// Win/loss split for games where this team was the away side
    pub away_record: WinLossRecord,

    /// Up to five most recent outcomes, most recent first
    pub last_five: Vec<GameOutcome>,

    /// Leading run of identical outcomes within `last_five`
    pub current_streak: Streak,
}

/// Winner label for a single head-to-head meeting, oriented to the (A, B)
/// pair the comparison was asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingWinner {
    TeamA,
    TeamB,
    Draw,
}

/// One past meeting between the two compared teams, scores oriented to
/// team A regardless of which side was at home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Date the meeting was played
    pub date: NaiveDate,

    /// Points scored by team A
    pub team_a_score: u32,

    /// Points scored by team B
    pub team_b_score: u32,

    /// Who took the meeting
    pub winner: MeetingWinner,
}

/// Aggregate outcome history between exactly two teams.
///
/// Draws cannot occur for finished basketball under the status model, but
/// the record tolerates malformed equal scorelines rather than
/// misclassifying them as a win for either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadStats {
    /// First compared team
    pub team_a: TeamId,

    /// Second compared team
    pub team_b: TeamId,

    /// Meetings won by team A, over the entire mutual history
    pub team_a_wins: u32,

    /// Meetings won by team B, over the entire mutual history
    pub team_b_wins: u32,

    /// Meetings with equal final scores
    pub draws: u32,

    /// All counted mutual meetings
    pub total_meetings: u32,

    /// Up to five most recent meetings, oldest of the window first
    pub last_meetings: Vec<Meeting>,

    /// Team A's mean score across the entire mutual history, 0 when never met
    pub avg_score_a: f64,

    /// Team B's mean score across the entire mutual history, 0 when never met
    pub avg_score_b: f64,
}

/// A single team score worth remembering (highest or lowest in the league).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Team that posted the score
    pub team: String,

    /// The score itself
    pub score: u32,

    /// When it happened
    pub date: NaiveDate,
}

/// The largest margin of victory observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRecord {
    /// Winning side's display name
    pub winner: String,

    /// Losing side's display name
    pub loser: String,

    /// Absolute score margin
    pub margin: u32,

    /// When it happened
    pub date: NaiveDate,
}

/// One entry in the league's scoring leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopScorer {
    /// Team this entry belongs to
    pub team_id: TeamId,

    /// Team display name
    pub team_name: String,

    /// Mean points scored per game
    pub average_points: f64,
}

/// League-wide records across every finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueStats {
    /// Finished matches counted
    pub total_games: u32,

    /// Mean points per team-appearance: total points / (2 x games), 0 when
    /// no games
    pub average_score: f64,

    /// Highest single team score; None until any positive score is seen
    pub highest_score: Option<ScoreRecord>,

    /// Lowest strictly positive single team score; zero scorelines never set
    /// this record
    pub lowest_score: Option<ScoreRecord>,

    /// Largest margin of victory; None until any decided game is seen
    pub biggest_win: Option<MarginRecord>,

    /// Top teams by mean points scored
    pub top_scorers: Vec<TopScorer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_display() {
        assert_eq!(Streak::Win(3).to_string(), "W3");
        assert_eq!(Streak::Loss(2).to_string(), "L2");
        assert_eq!(Streak::None.to_string(), "-");
    }

    #[test]
    fn test_streak_of_zero_run_is_none() {
        assert_eq!(Streak::of(GameOutcome::Win, 0), Streak::None);
        assert_eq!(Streak::of(GameOutcome::Loss, 4), Streak::Loss(4));
    }

    #[test]
    fn test_streak_parse_round_trip() {
        for streak in [Streak::None, Streak::Win(1), Streak::Loss(12)] {
            let parsed: Streak = streak.to_string().parse().unwrap();
            assert_eq!(parsed, streak);
        }
    }

    #[test]
    fn test_streak_parse_rejects_garbage() {
        assert!("W".parse::<Streak>().is_err());
        assert!("W0".parse::<Streak>().is_err());
        assert!("X3".parse::<Streak>().is_err());
        assert!("".parse::<Streak>().is_err());
    }

    #[test]
    fn test_streak_parse_rejects_multibyte_descriptors() {
        assert!("π2".parse::<Streak>().is_err());
        assert!("W٣".parse::<Streak>().is_err());
        assert!(serde_json::from_str::<Streak>("\"π2\"").is_err());
    }

    #[test]
    fn test_streak_serializes_as_descriptor_string() {
        assert_eq!(serde_json::to_string(&Streak::Win(2)).unwrap(), "\"W2\"");
        let back: Streak = serde_json::from_str("\"L5\"").unwrap();
        assert_eq!(back, Streak::Loss(5));
    }

    #[test]
    fn test_game_outcome_serializes_as_marker() {
        assert_eq!(serde_json::to_string(&GameOutcome::Win).unwrap(), "\"W\"");
        let back: Vec<GameOutcome> = serde_json::from_str("[\"W\",\"L\"]").unwrap();
        assert_eq!(back, vec![GameOutcome::Win, GameOutcome::Loss]);
    }

    #[test]
    fn test_win_loss_record_display_and_add() {
        let mut record = WinLossRecord::default();
        record.add(GameOutcome::Win);
        record.add(GameOutcome::Win);
        record.add(GameOutcome::Loss);
        assert_eq!(record.to_string(), "2-1");
        assert_eq!(record.wins, 2);
        assert_eq!(record.losses, 1);
    }
}
