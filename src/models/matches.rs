//! Match records and the chronology-enforced match log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MatchId, TeamId};

/// Lifecycle of a match as derived from the feed.
///
/// Postponed appears upstream but never contributes to aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
        };
        write!(f, "{}", label)
    }
}

/// A single scheduled or completed contest.
///
/// Scores are both present or both absent; normalization drops a lone score
/// so the pair invariant holds before a match ever reaches the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Upstream event identifier
    pub id: MatchId,

    /// Home side team id
    pub home_team: TeamId,

    /// Away side team id
    pub away_team: TeamId,

    /// Home display name as carried by the feed
    pub home_team_name: String,

    /// Away display name as carried by the feed
    pub away_team_name: String,

    /// Home final score, present only once the match has concluded
    pub home_score: Option<u32>,

    /// Away final score, same rule as `home_score`
    pub away_score: Option<u32>,

    /// Calendar date of the tip-off
    pub date: NaiveDate,

    /// Local tip-off time, "HH:MM"
    pub time: String,

    /// Lifecycle status
    pub status: MatchStatus,

    /// Venue name ("TBD" when the feed omits it)
    pub venue: String,

    /// Season label, e.g. "2024-2025"
    pub season: Option<String>,

    /// Round number where the feed carries one
    pub round: Option<u32>,

    /// Attendance where known
    pub attendance: Option<u32>,
}

impl Match {
    /// Create a scheduled match with no scores.
    pub fn new(
        id: impl Into<MatchId>,
        home_team: impl Into<TeamId>,
        away_team: impl Into<TeamId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_team_name: String::new(),
            away_team_name: String::new(),
            home_score: None,
            away_score: None,
            date,
            time: "20:00".to_string(),
            status: MatchStatus::Scheduled,
            venue: "TBD".to_string(),
            season: None,
            round: None,
            attendance: None,
        }
    }

    /// Builder method to mark the match finished with a final score.
    pub fn with_result(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = MatchStatus::Finished;
        self
    }

    /// Builder method to set the lifecycle status.
    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set the display names.
    pub fn with_names(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team_name = home.into();
        self.away_team_name = away.into();
        self
    }

    /// Final (home, away) score, present only when the match is finished
    /// and both scores made it through the feed.
    ///
    /// This is the single gate every aggregation goes through: anything that
    /// returns `None` here contributes nothing to statistics.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if self.status != MatchStatus::Finished {
            return None;
        }
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    /// Whether the given team played on either side.
    pub fn involves(&self, team: &TeamId) -> bool {
        self.home_team == *team || self.away_team == *team
    }

    /// Whether the given team was the home side.
    pub fn is_home(&self, team: &TeamId) -> bool {
        self.home_team == *team
    }
}

/// Chronology-enforced list of matches, oldest first.
///
/// Construction sorts by (date, time, id) with a stable sort, so "most
/// recent" always means "nearest the end of the log" no matter what order
/// the feed delivered the matches in. Every engine entry point takes a
/// `MatchLog` rather than a bare slice for exactly this reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchLog {
    matches: Vec<Match>,
}

impl MatchLog {
    /// Build a log from matches in any order.
    pub fn new(mut matches: Vec<Match>) -> Self {
        matches.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.time.cmp(&b.time))
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { matches }
    }

    /// All matches, oldest first.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }
}

impl<'a> IntoIterator for &'a MatchLog {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
