//! Opaque entity identifiers assigned by the upstream API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An upstream-assigned identifier, carried as-is.
///
/// TheSportsDB keys every entity by a numeric string (`"134867"`); the value
/// is opaque to this crate and only ever compared or displayed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Wrap a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Type alias for team IDs
pub type TeamId = Id;

/// Type alias for match (event) IDs
pub type MatchId = Id;

/// Type alias for player IDs
pub type PlayerId = Id;

/// Type alias for league IDs
pub type LeagueId = Id;
