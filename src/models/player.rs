//! Player roster data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PlayerId, TeamId};

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Upstream identifier
    pub id: PlayerId,

    /// Team this player is rostered on, when the feed names one
    pub team_id: Option<TeamId>,

    /// Team display name as carried by the feed
    pub team_name: Option<String>,

    /// Full name
    pub name: String,

    /// Position code: PG, SG, SF, PF, C, G, F, or the raw upstream label
    pub position: String,

    /// Nationality ("Unknown" when the feed omits it)
    pub nationality: String,

    /// Height as reported, e.g. "2.06 m"
    pub height: Option<String>,

    /// Weight as reported, e.g. "109 kg"
    pub weight: Option<String>,

    /// Date of birth where parseable
    pub date_of_birth: Option<NaiveDate>,
}

impl Player {
    /// Create a player with minimal fields; the rest default to absent.
    pub fn new(
        id: impl Into<PlayerId>,
        team_id: impl Into<TeamId>,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            team_id: Some(team_id.into()),
            team_name: None,
            name: name.into(),
            position: position.into(),
            nationality: "Unknown".to_string(),
            height: None,
            weight: None,
            date_of_birth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new("34145937", "134867", "Jayson Tatum", "SF");

        assert_eq!(player.name, "Jayson Tatum");
        assert_eq!(player.position, "SF");
        assert_eq!(player.nationality, "Unknown");
        assert!(player.date_of_birth.is_none());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("34145937", "134867", "Jayson Tatum", "SF");
        player.date_of_birth = NaiveDate::from_ymd_opt(1998, 3, 3);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
