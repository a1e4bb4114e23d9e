//! Per-team statistics computation.

use crate::models::{GameOutcome, MatchLog, Team, TeamStats, WinLossRecord};

use super::{leading_run, outcome_for, per_game_average, win_percentage, FORM_GUIDE_WINDOW};

/// Compute the full statistics record for one team.
///
/// Only finished matches with both scores and this team on either side
/// count. The form guide (`last_five`) holds the most recent
/// [`FORM_GUIDE_WINDOW`] outcomes, most recent first, and `current_streak`
/// is the leading run within that window, not the full history. Always
/// returns a fully populated record, zero-valued when the team has no
/// counted matches.
pub fn compute_team_stats(team: &Team, log: &MatchLog) -> TeamStats {
    let mut played = 0u32;
    let mut won = 0u32;
    let mut points_for = 0u32;
    let mut points_against = 0u32;
    let mut home_record = WinLossRecord::default();
    let mut away_record = WinLossRecord::default();
    let mut results: Vec<GameOutcome> = Vec::new();

    for m in log {
        let (home_score, away_score) = match m.final_score() {
            Some(scores) => scores,
            None => continue,
        };
        let outcome = match outcome_for(m, &team.id) {
            Some(outcome) => outcome,
            // Not this team's match.
            None => continue,
        };

        let (scored, conceded) = if m.is_home(&team.id) {
            home_record.add(outcome);
            (home_score, away_score)
        } else {
            away_record.add(outcome);
            (away_score, home_score)
        };

        played += 1;
        if outcome == GameOutcome::Win {
            won += 1;
        }
        points_for += scored;
        points_against += conceded;
        results.push(outcome);
    }

    let last_five: Vec<GameOutcome> = results
        .iter()
        .rev()
        .take(FORM_GUIDE_WINDOW)
        .copied()
        .collect();

    TeamStats {
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        played,
        won,
        lost: played - won,
        win_percentage: win_percentage(won, played),
        points_for,
        points_against,
        points_diff: points_for as i32 - points_against as i32,
        avg_points_scored: per_game_average(points_for, played),
        avg_points_conceded: per_game_average(points_against, played),
        home_record,
        away_record,
        current_streak: leading_run(&last_five),
        last_five,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Match, Streak};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn team() -> Team {
        Team::new("A", "Team A")
    }

    #[test]
    fn test_empty_history_is_zero_valued() {
        let stats = compute_team_stats(&team(), &MatchLog::new(vec![]));

        assert_eq!(stats.played, 0);
        assert_eq!(stats.won, 0);
        assert_eq!(stats.lost, 0);
        assert_eq!(stats.win_percentage, 0.0);
        assert_eq!(stats.avg_points_scored, 0.0);
        assert_eq!(stats.avg_points_conceded, 0.0);
        assert_eq!(stats.home_record, WinLossRecord::default());
        assert!(stats.last_five.is_empty());
        assert_eq!(stats.current_streak, Streak::None);
    }

    #[test]
    fn test_accumulation_and_side_splits() {
        let log = MatchLog::new(vec![
            // Home win, home loss, away win.
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "A", "C", date(2)).with_result(85, 95),
            Match::new("3", "B", "A", date(3)).with_result(88, 92),
            // Not A's match; must be ignored.
            Match::new("4", "B", "C", date(4)).with_result(100, 99),
            // A's match but still live; must be ignored.
            Match::new("5", "C", "A", date(5)),
        ]);

        let stats = compute_team_stats(&team(), &log);

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.lost, 1);
        assert_eq!(stats.points_for, 100 + 85 + 92);
        assert_eq!(stats.points_against, 90 + 95 + 88);
        assert_eq!(stats.points_diff, 4);
        assert_eq!(stats.home_record, WinLossRecord { wins: 1, losses: 1 });
        assert_eq!(stats.away_record, WinLossRecord { wins: 1, losses: 0 });
        assert!((stats.win_percentage - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.avg_points_scored - 277.0 / 3.0).abs() < 1e-9);
        assert!((stats.avg_points_conceded - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_five_is_most_recent_first() {
        use GameOutcome::{Loss, Win};
        // Oldest to newest: W, W, L, W, W.
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "A", "B", date(2)).with_result(100, 90),
            Match::new("3", "A", "B", date(3)).with_result(80, 90),
            Match::new("4", "A", "B", date(4)).with_result(100, 90),
            Match::new("5", "A", "B", date(5)).with_result(100, 90),
        ]);

        let stats = compute_team_stats(&team(), &log);

        assert_eq!(stats.last_five, vec![Win, Win, Loss, Win, Win]);
        // Leading run of the window: two wins before the loss breaks it.
        assert_eq!(stats.current_streak, Streak::Win(2));
    }

    #[test]
    fn test_streak_is_capped_by_the_window() {
        // Seven straight wins still report as a five-game streak.
        let matches: Vec<Match> = (1..=7)
            .map(|day| Match::new(format!("{}", day), "A", "B", date(day)).with_result(100, 90))
            .collect();

        let stats = compute_team_stats(&team(), &MatchLog::new(matches));

        assert_eq!(stats.last_five.len(), 5);
        assert_eq!(stats.current_streak, Streak::Win(5));
    }

    #[test]
    fn test_equal_scoreline_counts_as_loss() {
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(90, 90)
        ]);

        let stats = compute_team_stats(&team(), &log);

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 0);
        assert_eq!(stats.lost, 1);
        assert_eq!(stats.current_streak, Streak::Loss(1));
    }

    #[test]
    fn test_recomputation_is_stable() {
        let log = MatchLog::new(vec![
            Match::new("1", "A", "B", date(1)).with_result(100, 90),
            Match::new("2", "B", "A", date(2)).with_result(88, 91),
        ]);

        let first = compute_team_stats(&team(), &log);
        let second = compute_team_stats(&team(), &log);
        assert_eq!(first, second);
    }
}
