//! Team reference data.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// A franchise in the tracked league.
///
/// Produced by the normalization layer and treated as immutable reference
/// data; the stats engine only ever reads `id` and `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Upstream identifier
    pub id: TeamId,

    /// Display name, e.g. "Boston Celtics"
    pub name: String,

    /// Abbreviated name where upstream provides one, e.g. "BOS"
    pub short_name: Option<String>,

    /// Home city ("Unknown" when the feed omits it)
    pub city: String,

    /// Country ("Unknown" when the feed omits it)
    pub country: String,

    /// Home arena name ("Unknown Arena" when the feed omits it)
    pub arena: String,

    /// Arena capacity where known
    pub capacity: Option<u32>,

    /// Founding year where known
    pub founded: Option<u32>,

    /// Upstream description blurb, usually several paragraphs
    pub description: Option<String>,
}

impl Team {
    /// Create a team with the fields the engine cares about; descriptive
    /// metadata starts at its fallback values.
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: None,
            city: "Unknown".to_string(),
            country: "Unknown".to_string(),
            arena: "Unknown Arena".to_string(),
            capacity: None,
            founded: None,
            description: None,
        }
    }

    /// Builder method to set the home city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builder method to set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builder method to set arena name and capacity.
    pub fn with_arena(mut self, arena: impl Into<String>, capacity: Option<u32>) -> Self {
        self.arena = arena.into();
        self.capacity = capacity;
        self
    }
}
