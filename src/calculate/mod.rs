//! Statistics calculation engine.
//!
//! Computes derived views from a snapshot of teams and matches:
//! - League standings with streaks (sorted table)
//! - Per-team statistics with form guide and side splits
//! - Head-to-head history between two teams
//! - League-wide records and the scoring leaderboard
//!
//! Everything here is a pure function: no I/O, no state, no clock. Each call
//! recomputes from the snapshot it is given, so concurrent invocations are
//! trivially safe. Matches arrive through [`MatchLog`](crate::models::MatchLog),
//! which guarantees oldest-first chronology; "most recent" always means the
//! end of the log.

mod head_to_head;
mod league;
mod standings;
mod team_stats;

pub use head_to_head::compute_head_to_head;
pub use league::compute_league_stats;
pub use standings::compute_standings;
pub use team_stats::compute_team_stats;

use crate::models::{GameOutcome, Match, Streak, TeamId};

/// How many recent games the standings streak looks back over.
///
/// Deliberately distinct from [`FORM_GUIDE_WINDOW`]: the standings table has
/// always shown a short three-game streak while the form guide tracks five.
pub const STANDINGS_STREAK_WINDOW: usize = 3;

/// How many recent games the per-team form guide (and its streak) covers.
pub const FORM_GUIDE_WINDOW: usize = 5;

/// Win percentage as a 0.0 to 1.0 ratio, 0 when no games were played.
pub fn win_percentage(won: u32, played: u32) -> f64 {
    if played == 0 {
        0.0
    } else {
        won as f64 / played as f64
    }
}

/// Per-game average with a zero-games guard.
pub fn per_game_average(total: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

/// Outcome of a match from `team`'s perspective.
///
/// `None` when the team did not play or the match does not count toward
/// statistics. An equal scoreline reads as a loss here; finished basketball
/// cannot tie, so the branch only matters for malformed feeds.
pub(crate) fn outcome_for(m: &Match, team: &TeamId) -> Option<GameOutcome> {
    let (home, away) = m.final_score()?;
    let (scored, conceded) = if m.is_home(team) {
        (home, away)
    } else if m.involves(team) {
        (away, home)
    } else {
        return None;
    };
    if scored > conceded {
        Some(GameOutcome::Win)
    } else {
        Some(GameOutcome::Loss)
    }
}

/// Run of identical outcomes starting at the front of the slice.
pub(crate) fn leading_run(outcomes: &[GameOutcome]) -> Streak {
    match outcomes.first() {
        Some(&first) => {
            let count = outcomes.iter().take_while(|&&o| o == first).count() as u32;
            Streak::of(first, count)
        }
        None => Streak::None,
    }
}

/// Run of identical outcomes ending at the back of the slice.
pub(crate) fn trailing_run(outcomes: &[GameOutcome]) -> Streak {
    match outcomes.last() {
        Some(&last) => {
            let count = outcomes.iter().rev().take_while(|&&o| o == last).count() as u32;
            Streak::of(last, count)
        }
        None => Streak::None,
    }
}
