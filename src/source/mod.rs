//! League data sources.
//!
//! A data source serves teams, rosters, and match feeds without saying where
//! they come from. The live API client implements it; [`MemorySource`] backs
//! offline snapshots and tests. All sources implement the
//! [`LeagueDataSource`] trait.

pub mod memory;

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::models::{Match, MatchLog, Player, Team, TeamId};
use crate::sportsdb::{ApiError, Client};

pub use memory::MemorySource;

/// Errors that can occur reading from a data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Core trait for anything that can serve league data.
#[async_trait]
pub trait LeagueDataSource {
    /// Every team in the league.
    async fn teams(&self) -> Result<Vec<Team>, SourceError>;

    /// One team by id.
    async fn team(&self, id: &TeamId) -> Result<Option<Team>, SourceError>;

    /// The match feed for one team.
    async fn team_matches(&self, id: &TeamId) -> Result<Vec<Match>, SourceError>;

    /// Roster for one team.
    async fn team_players(&self, id: &TeamId) -> Result<Vec<Player>, SourceError>;
}

#[async_trait]
impl LeagueDataSource for Client {
    async fn teams(&self) -> Result<Vec<Team>, SourceError> {
        Ok(Client::teams(self).await?)
    }

    async fn team(&self, id: &TeamId) -> Result<Option<Team>, SourceError> {
        Ok(Client::team(self, id).await?)
    }

    async fn team_matches(&self, id: &TeamId) -> Result<Vec<Match>, SourceError> {
        Ok(Client::team_matches(self, id).await?)
    }

    async fn team_players(&self, id: &TeamId) -> Result<Vec<Player>, SourceError> {
        Ok(Client::players_by_team(self, id).await?)
    }
}

/// Collect every match from every team's feed into one chronological log.
///
/// Team feeds overlap: a game appears in both participants' feeds. The first
/// sighting of each match id wins and later duplicates are dropped, so a
/// game is never counted twice.
pub async fn all_matches(source: &dyn LeagueDataSource) -> Result<MatchLog, SourceError> {
    let teams = source.teams().await?;

    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for team in &teams {
        for m in source.team_matches(&team.id).await? {
            if seen.insert(m.id.clone()) {
                matches.push(m);
            }
        }
    }

    debug!(
        "Collected {} unique matches from {} team feeds",
        matches.len(),
        teams.len()
    );
    Ok(MatchLog::new(matches))
}

/// Collect every team's roster into one list.
pub async fn all_players(source: &dyn LeagueDataSource) -> Result<Vec<Player>, SourceError> {
    let teams = source.teams().await?;

    let mut players = Vec::new();
    for team in &teams {
        players.extend(source.team_players(&team.id).await?);
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchId;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn sample_source() -> MemorySource {
        let teams = vec![Team::new("1", "Hawks"), Team::new("2", "Lions")];
        let matches = vec![
            Match::new("m1", "1", "2", date(1)).with_result(90, 80),
            Match::new("m2", "2", "1", date(2)).with_result(70, 75),
        ];
        MemorySource::new(teams, matches, Vec::new())
    }

    #[tokio::test]
    async fn test_all_matches_deduplicates_shared_games() {
        let source = sample_source();

        // Both teams' feeds carry both games; each id must survive once.
        let log = all_matches(&source).await.unwrap();
        assert_eq!(log.len(), 2);

        let ids: Vec<&MatchId> = log.iter().map(|m| &m.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn test_all_matches_is_chronological() {
        let source = sample_source();

        let log = all_matches(&source).await.unwrap();
        let dates: Vec<NaiveDate> = log.iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![date(1), date(2)]);
    }

    #[tokio::test]
    async fn test_all_matches_with_no_teams_is_empty() {
        let source = MemorySource::default();
        let log = all_matches(&source).await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_all_players_collects_every_roster() {
        let teams = vec![Team::new("1", "Hawks"), Team::new("2", "Lions")];
        let players = vec![
            Player::new("p1", "1", "Alice", "PG"),
            Player::new("p2", "2", "Bea", "C"),
            Player::new("p3", "1", "Cara", "SF"),
        ];
        let source = MemorySource::new(teams, Vec::new(), players);

        let all = all_players(&source).await.unwrap();

        // Rosters arrive grouped by team, in team order.
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Cara", "Bea"]);
    }
}
