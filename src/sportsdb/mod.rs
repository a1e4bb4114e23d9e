//! TheSportsDB API client.
//!
//! Talks to the free JSON API at thesportsdb.com and converts its payloads
//! into crate models:
//! - Endpoint paths double as keys into an owned [`ResponseCache`]
//! - List responses use JSON `null` for "no results"; that reads as empty
//! - Mixed team event feeds are filtered to the configured sport before
//!   normalization

pub mod cache;
pub mod normalize;
pub mod wire;

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::models::{LeagueId, Match, Player, PlayerId, Team, TeamId};

pub use cache::ResponseCache;

/// Errors that can occur talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limited by {host}, retry after {retry_after_secs}s")]
    RateLimited { host: String, retry_after_secs: u64 },

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No league found matching {0:?}")]
    UnknownLeague(String),
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,

    /// API key path segment ("3" is the free test key)
    pub api_key: String,

    /// League served when no other league is named
    pub league_name: String,

    /// Pinned league id; discovered by name lookup when absent
    pub league_id: Option<LeagueId>,

    /// Sport filter applied to mixed team event feeds
    pub sport: String,

    /// Request timeout
    pub timeout: Duration,

    /// How long cached team lookups stay fresh
    pub teams_ttl: Duration,

    /// How long cached player lookups stay fresh
    pub players_ttl: Duration,

    /// How long cached event lookups stay fresh
    pub matches_ttl: Duration,

    /// Skip cache reads; responses are still written back
    pub bypass_cache: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.thesportsdb.com/api/v1/json".to_string(),
            api_key: "3".to_string(),
            league_name: "NBA".to_string(),
            league_id: Some(LeagueId::from("4387")),
            sport: "Basketball".to_string(),
            timeout: Duration::from_secs(30),
            teams_ttl: Duration::from_secs(86400),   // 24 hours
            players_ttl: Duration::from_secs(43200), // 12 hours
            matches_ttl: Duration::from_secs(3600),  // 1 hour
            bypass_cache: false,
        }
    }
}

/// API client with an in-memory response cache.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    cache: Mutex<ResponseCache>,
}

impl Client {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("courtside/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config,
            cache: Mutex::new(ResponseCache::new()),
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(ClientConfig::default())
    }

    /// All teams in the configured league.
    pub async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        let endpoint = format!(
            "search_all_teams.php?l={}",
            query_encode(&self.config.league_name)
        );
        let response: wire::TeamsResponse =
            self.get_json(&endpoint, self.config.teams_ttl).await?;

        let raw = response.teams.unwrap_or_default();
        if raw.is_empty() {
            warn!("No teams returned for league {:?}", self.config.league_name);
        }
        Ok(raw.iter().map(normalize::normalize_team).collect())
    }

    /// A single team by id, when the API knows it.
    pub async fn team(&self, id: &TeamId) -> Result<Option<Team>, ApiError> {
        let endpoint = format!("lookupteam.php?id={}", id);
        let response: wire::TeamsResponse =
            self.get_json(&endpoint, self.config.teams_ttl).await?;

        Ok(response
            .teams
            .unwrap_or_default()
            .first()
            .map(normalize::normalize_team))
    }

    /// Roster for one team.
    pub async fn players_by_team(&self, team_id: &TeamId) -> Result<Vec<Player>, ApiError> {
        let endpoint = format!("lookup_all_players.php?id={}", team_id);
        let response: wire::PlayersResponse =
            self.get_json(&endpoint, self.config.players_ttl).await?;

        Ok(response
            .player
            .unwrap_or_default()
            .iter()
            .map(normalize::normalize_player)
            .collect())
    }

    /// A single player by id.
    pub async fn player(&self, id: &PlayerId) -> Result<Option<Player>, ApiError> {
        let endpoint = format!("lookupplayer.php?id={}", id);
        let response: wire::PlayersResponse =
            self.get_json(&endpoint, self.config.players_ttl).await?;

        Ok(response
            .player
            .unwrap_or_default()
            .first()
            .map(normalize::normalize_player))
    }

    /// Recent events for one team.
    pub async fn team_matches(&self, team_id: &TeamId) -> Result<Vec<Match>, ApiError> {
        let endpoint = format!("eventslast.php?id={}", team_id);
        let response: wire::EventsResponse =
            self.get_json(&endpoint, self.config.matches_ttl).await?;

        Ok(self.normalize_events(response))
    }

    /// Upcoming events across the configured league.
    pub async fn upcoming_matches(&self) -> Result<Vec<Match>, ApiError> {
        let league_id = self.league_id().await?;
        let endpoint = format!("eventsnextleague.php?id={}", league_id);
        let response: wire::EventsResponse =
            self.get_json(&endpoint, self.config.matches_ttl).await?;

        Ok(self.normalize_events(response))
    }

    /// Recent results across the configured league.
    pub async fn past_matches(&self) -> Result<Vec<Match>, ApiError> {
        let league_id = self.league_id().await?;
        let endpoint = format!("eventspastleague.php?id={}", league_id);
        let response: wire::EventsResponse =
            self.get_json(&endpoint, self.config.matches_ttl).await?;

        Ok(self.normalize_events(response))
    }

    /// Case-insensitive league search by partial name, within the
    /// configured sport.
    pub async fn find_league(&self, name: &str) -> Result<Option<LeagueId>, ApiError> {
        let endpoint = format!(
            "search_all_leagues.php?s={}",
            query_encode(&self.config.sport)
        );
        let response: wire::LeaguesResponse =
            self.get_json(&endpoint, self.config.teams_ttl).await?;

        let needle = name.to_lowercase();
        Ok(response
            .leagues
            .unwrap_or_default()
            .into_iter()
            .find(|league| league.str_league.to_lowercase().contains(&needle))
            .map(|league| LeagueId::from(league.id_league)))
    }

    /// The configured league id, discovered by name when not pinned.
    async fn league_id(&self) -> Result<LeagueId, ApiError> {
        if let Some(id) = &self.config.league_id {
            return Ok(id.clone());
        }
        self.find_league(&self.config.league_name)
            .await?
            .ok_or_else(|| ApiError::UnknownLeague(self.config.league_name.clone()))
    }

    fn normalize_events(&self, response: wire::EventsResponse) -> Vec<Match> {
        response
            .events
            .unwrap_or_default()
            .iter()
            .filter(|event| normalize::matches_sport(event, &self.config.sport))
            .filter_map(normalize::normalize_match)
            .collect()
    }

    /// Fetch an endpoint and decode it, via the cache unless bypassed.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        ttl: Duration,
    ) -> Result<T, ApiError> {
        let body = self.get_raw(endpoint, ttl).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_raw(&self, endpoint: &str, ttl: Duration) -> Result<String, ApiError> {
        if !self.config.bypass_cache {
            if let Some(body) = self.cache_lock().get(endpoint) {
                return Ok(body);
            }
        }

        let url = self.endpoint_url(endpoint)?;
        info!("Fetching {}", url);

        let response = self.http.get(url.as_str()).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);

            return Err(ApiError::RateLimited {
                host: url.host_str().unwrap_or("unknown").to_string(),
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        self.cache_lock().insert(endpoint, body.clone(), ttl);
        Ok(body)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let raw = format!(
            "{}/{}/{}",
            self.config.base_url, self.config.api_key, endpoint
        );
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    fn cache_lock(&self) -> MutexGuard<'_, ResponseCache> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Encode a value for use inside a query string.
fn query_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
