//! League-wide records and the scoring leaderboard.

use std::cmp::Ordering;

use crate::models::{LeagueStats, MarginRecord, MatchLog, ScoreRecord, Team, TopScorer};

use super::{compute_team_stats, per_game_average};

/// How many teams the scoring leaderboard keeps.
const TOP_SCORERS_LIMIT: usize = 10;

/// Compute league-wide records across every finished match.
///
/// Record chases use strict comparisons, so the first match to post a value
/// keeps the record on ties; within one match the home score is considered
/// before the away score. A score of exactly 0 can never take the lowest-
/// score record, and a drawn scoreline can never take the biggest-win
/// record. All fields are well-defined for an empty snapshot.
pub fn compute_league_stats(teams: &[Team], log: &MatchLog) -> LeagueStats {
    let mut total_games = 0u32;
    let mut total_points = 0u32;
    let mut highest_score: Option<ScoreRecord> = None;
    let mut lowest_score: Option<ScoreRecord> = None;
    let mut biggest_win: Option<MarginRecord> = None;

    for m in log {
        let (home_score, away_score) = match m.final_score() {
            Some(scores) => scores,
            None => continue,
        };

        total_games += 1;
        total_points += home_score + away_score;

        // Home candidate first, then away, each against the current record.
        for (name, score) in [
            (&m.home_team_name, home_score),
            (&m.away_team_name, away_score),
        ] {
            let current_high = highest_score.as_ref().map_or(0, |r| r.score);
            if score > current_high {
                highest_score = Some(ScoreRecord {
                    team: name.clone(),
                    score,
                    date: m.date,
                });
            }

            let current_low = lowest_score.as_ref().map_or(u32::MAX, |r| r.score);
            if score > 0 && score < current_low {
                lowest_score = Some(ScoreRecord {
                    team: name.clone(),
                    score,
                    date: m.date,
                });
            }
        }

        let margin = home_score.abs_diff(away_score);
        let current_margin = biggest_win.as_ref().map_or(0, |r| r.margin);
        if margin > current_margin {
            let (winner, loser) = if home_score > away_score {
                (&m.home_team_name, &m.away_team_name)
            } else {
                (&m.away_team_name, &m.home_team_name)
            };
            biggest_win = Some(MarginRecord {
                winner: winner.clone(),
                loser: loser.clone(),
                margin,
                date: m.date,
            });
        }
    }

    let mut top_scorers: Vec<TopScorer> = teams
        .iter()
        .map(|team| {
            let stats = compute_team_stats(team, log);
            TopScorer {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                average_points: stats.avg_points_scored,
            }
        })
        .collect();
    top_scorers.sort_by(|a, b| {
        b.average_points
            .partial_cmp(&a.average_points)
            .unwrap_or(Ordering::Equal)
    });
    top_scorers.truncate(TOP_SCORERS_LIMIT);

    LeagueStats {
        total_games,
        average_score: per_game_average(total_points, total_games * 2),
        highest_score,
        lowest_score,
        biggest_win,
        top_scorers,
    }
}
