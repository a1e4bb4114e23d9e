//! Preloaded in-memory data source.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Match, Player, Team, TeamId};

use super::{LeagueDataSource, SourceError};

/// The JSON document a snapshot file holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teams: Vec<Team>,

    #[serde(default)]
    pub matches: Vec<Match>,

    #[serde(default)]
    pub players: Vec<Player>,
}

/// Data source backed by fixed in-memory collections.
///
/// Serves snapshot files for offline runs and fixtures in tests; lookups
/// never touch the network.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    teams: Vec<Team>,
    matches: Vec<Match>,
    players: Vec<Player>,
}

impl MemorySource {
    pub fn new(teams: Vec<Team>, matches: Vec<Match>, players: Vec<Player>) -> Self {
        Self {
            teams,
            matches,
            players,
        }
    }

    /// Load a snapshot file.
    pub fn from_snapshot(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;

        info!(
            "Loaded snapshot from {:?}: {} teams, {} matches, {} players",
            path,
            snapshot.teams.len(),
            snapshot.matches.len(),
            snapshot.players.len()
        );
        Ok(Self::new(snapshot.teams, snapshot.matches, snapshot.players))
    }
}

#[async_trait]
impl LeagueDataSource for MemorySource {
    async fn teams(&self) -> Result<Vec<Team>, SourceError> {
        Ok(self.teams.clone())
    }

    async fn team(&self, id: &TeamId) -> Result<Option<Team>, SourceError> {
        Ok(self.teams.iter().find(|team| &team.id == id).cloned())
    }

    async fn team_matches(&self, id: &TeamId) -> Result<Vec<Match>, SourceError> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.involves(id))
            .cloned()
            .collect())
    }

    async fn team_players(&self, id: &TeamId) -> Result<Vec<Player>, SourceError> {
        Ok(self
            .players
            .iter()
            .filter(|player| player.team_id.as_ref() == Some(id))
            .cloned()
            .collect())
    }
}
