//! League standings computation.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{GameOutcome, MatchLog, Standing, Streak, Team, TeamId};

use super::{outcome_for, trailing_run, win_percentage, STANDINGS_STREAK_WINDOW};

/// Compute the standings table for a set of teams.
///
/// Returns exactly one row per entry in `teams`, in descending win-percentage
/// order with descending point differential as the tie-break; rows that tie
/// on both keep their input-relative order (the sort is stable).
///
/// A match counts only when it is finished with both scores, and only when
/// *both* referenced teams appear in `teams`; a match against an unknown team
/// is skipped whole rather than half-scored. The streak column is the one
/// exception: it scans the team's own finished matches regardless of whether
/// the opponent is known, restricted to the most recent
/// [`STANDINGS_STREAK_WINDOW`] games.
pub fn compute_standings(teams: &[Team], log: &MatchLog) -> Vec<Standing> {
    let mut tallies: Vec<Tally> = teams.iter().map(|_| Tally::default()).collect();
    let index: HashMap<&TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (&team.id, i))
        .collect();

    for m in log {
        let (home_score, away_score) = match m.final_score() {
            Some(scores) => scores,
            None => continue,
        };
        let (home_idx, away_idx) = match (index.get(&m.home_team), index.get(&m.away_team)) {
            (Some(&h), Some(&a)) => (h, a),
            // A side we know nothing about cannot be scored; drop the match.
            _ => continue,
        };

        let home_won = home_score > away_score;

        let home = &mut tallies[home_idx];
        home.played += 1;
        home.points_for += home_score;
        home.points_against += away_score;
        if home_won {
            home.won += 1;
        } else {
            home.lost += 1;
        }

        let away = &mut tallies[away_idx];
        away.played += 1;
        away.points_for += away_score;
        away.points_against += home_score;
        if home_won {
            away.lost += 1;
        } else {
            away.won += 1;
        }
    }

    let mut standings: Vec<Standing> = teams
        .iter()
        .zip(tallies)
        .map(|(team, tally)| Standing {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            played: tally.played,
            won: tally.won,
            lost: tally.lost,
            win_percentage: win_percentage(tally.won, tally.played),
            points_for: tally.points_for,
            points_against: tally.points_against,
            points_diff: tally.points_for as i32 - tally.points_against as i32,
            streak: recent_streak(&team.id, log),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.win_percentage
            .partial_cmp(&a.win_percentage)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.points_diff.cmp(&a.points_diff))
    });

    standings
}

#[derive(Default)]
struct Tally {
    played: u32,
    won: u32,
    lost: u32,
    points_for: u32,
    points_against: u32,
}

/// Trailing same-result run over the team's most recent finished games.
fn recent_streak(team: &TeamId, log: &MatchLog) -> Streak {
    let outcomes: Vec<GameOutcome> = log.iter().filter_map(|m| outcome_for(m, team)).collect();
    let start = outcomes.len().saturating_sub(STANDINGS_STREAK_WINDOW);
    trailing_run(&outcomes[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Match, MatchStatus};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn teams(ids: &[&str]) -> Vec<Team> {
        ids.iter()
            .map(|id| Team::new(*id, format!("Team {}", id)))
            .collect()
    }

    #[test]
    fn test_one_row_per_team_even_without_matches() {
        let standings = compute_standings(&teams(&["A", "B", "C"]), &MatchLog::new(vec![]));

        assert_eq!(standings.len(), 3);
        for row in &standings {
            assert_eq!(row.played, 0);
            assert_eq!(row.win_percentage, 0.0);
            assert_eq!(row.streak, Streak::None);
        }
    }

    #[test]
    fn test_single_match_scenario() {
        let teams = teams(&["A", "B"]);
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(10)).with_result(98, 105),
            Match::new("2", "B", "A", date(20)),
        ]);

        let standings = compute_standings(&teams, &log);

        // B won, so B sorts first.
        assert_eq!(standings[0].team_id.as_str(), "B");
        assert_eq!(standings[0].played, 1);
        assert_eq!(standings[0].won, 1);
        assert_eq!(standings[0].lost, 0);
        assert_eq!(standings[0].points_for, 105);
        assert_eq!(standings[0].points_against, 98);
        assert_eq!(standings[0].points_diff, 7);
        assert_eq!(standings[0].win_percentage, 1.0);
        assert_eq!(standings[0].streak, Streak::Win(1));

        assert_eq!(standings[1].team_id.as_str(), "A");
        assert_eq!(standings[1].played, 1);
        assert_eq!(standings[1].won, 0);
        assert_eq!(standings[1].lost, 1);
        assert_eq!(standings[1].points_for, 98);
        assert_eq!(standings[1].points_against, 105);
        assert_eq!(standings[1].points_diff, -7);
        assert_eq!(standings[1].win_percentage, 0.0);
        assert_eq!(standings[1].streak, Streak::Loss(1));
    }

    #[test]
    fn test_unfinished_and_scoreless_matches_do_not_count() {
        let teams = teams(&["A", "B"]);
        let mut live = Match::new("2", "A", "B", date(11)).with_status(MatchStatus::Live);
        live.home_score = Some(50);
        live.away_score = Some(48);
        let mut no_scores = Match::new("3", "A", "B", date(12));
        no_scores.status = MatchStatus::Finished;

        let log = MatchLog::new(vec![
            live,
            no_scores,
            Match::new("4", "A", "B", date(13)).with_status(MatchStatus::Postponed),
        ]);

        for row in compute_standings(&teams, &log) {
            assert_eq!(row.played, 0);
        }
    }

    #[test]
    fn test_match_against_unknown_team_is_skipped_whole() {
        let teams = teams(&["A"]);
        let log = MatchLog::new(vec![
            Match::new("1", "A", "GHOST", date(10)).with_result(120, 80)
        ]);

        let standings = compute_standings(&teams, &log);

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].played, 0);
        assert_eq!(standings[0].points_for, 0);
        // The streak scan is per-team and does not care who the opponent was.
        assert_eq!(standings[0].streak, Streak::Win(1));
    }

    #[test]
    fn test_each_match_contributes_one_win_and_one_loss() {
        let teams = teams(&["A", "B", "C"]);
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "B", "C", date(2)).with_result(88, 91),
            Match::new("3", "C", "A", date(3)).with_result(95, 99),
            Match::new("4", "A", "B", date(4)),
        ]);

        let standings = compute_standings(&teams, &log);

        let won: u32 = standings.iter().map(|s| s.won).sum();
        let lost: u32 = standings.iter().map(|s| s.lost).sum();
        assert_eq!(won, 3);
        assert_eq!(lost, 3);
        for row in &standings {
            assert_eq!(
                row.points_diff,
                row.points_for as i32 - row.points_against as i32
            );
        }
    }

    #[test]
    fn test_streak_is_trailing_run_over_last_three() {
        let teams = teams(&["A", "B"]);
        // Oldest to newest for A: W, W, L, W, W
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "A", "B", date(2)).with_result(100, 90),
            Match::new("3", "B", "A", date(3)).with_result(100, 90),
            Match::new("4", "A", "B", date(4)).with_result(100, 90),
            Match::new("5", "B", "A", date(5)).with_result(90, 100),
        ]);

        let standings = compute_standings(&teams, &log);
        let a = standings.iter().find(|s| s.team_id.as_str() == "A").unwrap();
        let b = standings.iter().find(|s| s.team_id.as_str() == "B").unwrap();

        // A's last three are L, W, W.
        assert_eq!(a.streak, Streak::Win(2));
        // B's last three are W, L, L.
        assert_eq!(b.streak, Streak::Loss(2));
    }

    #[test]
    fn test_streak_capped_by_window() {
        let teams = teams(&["A", "B"]);
        let matches: Vec<Match> = (1..=6)
            .map(|day| {
                Match::new(format!("{}", day), "A", "B", date(day)).with_result(100, 90)
            })
            .collect();

        let standings = compute_standings(&teams, &MatchLog::new(matches));
        let a = standings.iter().find(|s| s.team_id.as_str() == "A").unwrap();

        assert_eq!(a.streak, Streak::Win(3));
    }

    #[test]
    fn test_tie_break_by_points_diff_then_input_order() {
        let teams = teams(&["A", "B", "C", "D"]);
        let log = MatchLog::new(vec![
            // A and B both 1-1; A has the better differential.
            Match::new("1", "A", "C", date(1)).with_result(110, 80),
            Match::new("2", "A", "D", date(2)).with_result(80, 90),
            Match::new("3", "B", "C", date(3)).with_result(100, 95),
            Match::new("4", "B", "D", date(4)).with_result(95, 100),
        ]);

        let standings = compute_standings(&teams, &log);
        let order: Vec<&str> = standings.iter().map(|s| s.team_id.as_str()).collect();

        // D is 2-0 and C is 0-2; A and B are both 1-1 and separated only by
        // differential (+20 vs 0).
        assert_eq!(order, vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_recomputation_is_stable() {
        let teams = teams(&["A", "B", "C"]);
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "B", "C", date(2)).with_result(88, 91),
        ]);

        let first = compute_standings(&teams, &log);
        let second = compute_standings(&teams, &log);
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let teams = teams(&["X", "Y", "Z"]);
        let standings = compute_standings(&teams, &MatchLog::new(vec![]));
        let order: Vec<&str> = standings.iter().map(|s| s.team_id.as_str()).collect();

        assert_eq!(order, vec!["X", "Y", "Z"]);
    }
}
