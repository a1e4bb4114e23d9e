//! Head-to-head history between two teams.

use crate::models::{HeadToHeadStats, MatchLog, Meeting, MeetingWinner, TeamId};

use super::{per_game_average, FORM_GUIDE_WINDOW};

/// Compute the mutual record between `team_a` and `team_b`.
///
/// Counts every finished match whose home/away pair is exactly these two
/// teams, in either orientation. Win counts, draw count, and score averages
/// cover the *entire* mutual history; only the `last_meetings` display list
/// is limited to the most recent [`FORM_GUIDE_WINDOW`] games, presented
/// oldest of the window first. Teams that never met get a zero-valued
/// record.
pub fn compute_head_to_head(
    team_a: &TeamId,
    team_b: &TeamId,
    log: &MatchLog,
) -> HeadToHeadStats {
    let mut team_a_wins = 0u32;
    let mut team_b_wins = 0u32;
    let mut draws = 0u32;
    let mut points_a = 0u32;
    let mut points_b = 0u32;
    let mut meetings: Vec<Meeting> = Vec::new();

    for m in log {
        let (home_score, away_score) = match m.final_score() {
            Some(scores) => scores,
            None => continue,
        };
        let pair_matches = (m.home_team == *team_a && m.away_team == *team_b)
            || (m.home_team == *team_b && m.away_team == *team_a);
        if !pair_matches {
            continue;
        }

        let (a_score, b_score) = if m.is_home(team_a) {
            (home_score, away_score)
        } else {
            (away_score, home_score)
        };

        let winner = if a_score > b_score {
            team_a_wins += 1;
            MeetingWinner::TeamA
        } else if b_score > a_score {
            team_b_wins += 1;
            MeetingWinner::TeamB
        } else {
            draws += 1;
            MeetingWinner::Draw
        };

        points_a += a_score;
        points_b += b_score;
        meetings.push(Meeting {
            date: m.date,
            team_a_score: a_score,
            team_b_score: b_score,
            winner,
        });
    }

    let total_meetings = meetings.len() as u32;
    let window_start = meetings.len().saturating_sub(FORM_GUIDE_WINDOW);
    let last_meetings = meetings.split_off(window_start);

    HeadToHeadStats {
        team_a: team_a.clone(),
        team_b: team_b.clone(),
        team_a_wins,
        team_b_wins,
        draws,
        total_meetings,
        last_meetings,
        avg_score_a: per_game_average(points_a, total_meetings),
        avg_score_b: per_game_average(points_b, total_meetings),
    }
}
