//! Configuration loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::LeagueId;
use crate::sportsdb::ClientConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Upstream API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key ("3" is the free test key)
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// League name used for team listing and league discovery
    #[serde(default = "default_league_name")]
    pub league_name: String,

    /// Pinned league id; cleared to force discovery by name
    #[serde(default = "default_league_id")]
    pub league_id: Option<String>,

    /// Sport filter for mixed feeds
    #[serde(default = "default_sport")]
    pub sport: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://www.thesportsdb.com/api/v1/json".to_string()
}

fn default_api_key() -> String {
    "3".to_string()
}

fn default_league_name() -> String {
    "NBA".to_string()
}

fn default_league_id() -> Option<String> {
    Some("4387".to_string())
}

fn default_sport() -> String {
    "Basketball".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            league_name: default_league_name(),
            league_id: default_league_id(),
            sport: default_sport(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Cache freshness windows, per data class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Team data moves slowly
    #[serde(default = "default_teams_ttl")]
    pub teams_ttl_secs: u64,

    /// Rosters change on trades and signings
    #[serde(default = "default_players_ttl")]
    pub players_ttl_secs: u64,

    /// Scores and schedules move fastest
    #[serde(default = "default_matches_ttl")]
    pub matches_ttl_secs: u64,
}

fn default_teams_ttl() -> u64 {
    86400 // 24 hours
}

fn default_players_ttl() -> u64 {
    43200 // 12 hours
}

fn default_matches_ttl() -> u64 {
    3600 // 1 hour
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            teams_ttl_secs: default_teams_ttl(),
            players_ttl_secs: default_players_ttl(),
            matches_ttl_secs: default_matches_ttl(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api: ApiConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from a file when one is given, then
    /// apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.api.api_key.is_empty() {
            return Err(ConfigError::ValidationError(
                "API key must not be empty".to_string(),
            ));
        }

        if self.api.league_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "League name must not be empty".to_string(),
            ));
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the API client configuration this config describes.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.trim_end_matches('/').to_string(),
            api_key: self.api.api_key.clone(),
            league_name: self.api.league_name.clone(),
            league_id: self.api.league_id.as_deref().map(LeagueId::from),
            sport: self.api.sport.clone(),
            timeout: Duration::from_secs(self.api.timeout_seconds),
            teams_ttl: Duration::from_secs(self.cache.teams_ttl_secs),
            players_ttl: Duration::from_secs(self.cache.players_ttl_secs),
            matches_ttl: Duration::from_secs(self.cache.matches_ttl_secs),
            bypass_cache: false,
        }
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("SPORTSDB_API_KEY") {
            if !key.is_empty() {
                self.api.api_key = key;
            }
        }
    }
}
