//! Raw TheSportsDB payload shapes.
//!
//! The upstream API types everything as strings (`"134867"`, `"102"`) and
//! wraps every list in a *nullable* array, so these mirrors stay deliberately
//! loose: only identity fields are required, everything else is optional and
//! left unparsed until [`super::normalize`] turns it into a model.

use serde::Deserialize;

/// One team as the API ships it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    #[serde(rename = "idTeam")]
    pub id_team: String,

    #[serde(rename = "strTeam")]
    pub str_team: String,

    #[serde(rename = "strTeamShort")]
    pub str_team_short: Option<String>,

    #[serde(rename = "intFormedYear")]
    pub int_formed_year: Option<String>,

    #[serde(rename = "strSport")]
    pub str_sport: Option<String>,

    #[serde(rename = "strLeague")]
    pub str_league: Option<String>,

    #[serde(rename = "strStadium")]
    pub str_stadium: Option<String>,

    #[serde(rename = "strStadiumLocation")]
    pub str_stadium_location: Option<String>,

    #[serde(rename = "intStadiumCapacity")]
    pub int_stadium_capacity: Option<String>,

    #[serde(rename = "strCountry")]
    pub str_country: Option<String>,

    #[serde(rename = "strDescriptionEN")]
    pub str_description_en: Option<String>,
}

/// One player as the API ships it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(rename = "idPlayer")]
    pub id_player: String,

    #[serde(rename = "idTeam")]
    pub id_team: Option<String>,

    #[serde(rename = "strPlayer")]
    pub str_player: String,

    #[serde(rename = "strTeam")]
    pub str_team: Option<String>,

    #[serde(rename = "strPosition")]
    pub str_position: Option<String>,

    #[serde(rename = "strNationality")]
    pub str_nationality: Option<String>,

    #[serde(rename = "strHeight")]
    pub str_height: Option<String>,

    #[serde(rename = "strWeight")]
    pub str_weight: Option<String>,

    #[serde(rename = "dateBorn")]
    pub date_born: Option<String>,
}

/// One event (match) as the API ships it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "idEvent")]
    pub id_event: String,

    #[serde(rename = "idHomeTeam")]
    pub id_home_team: String,

    #[serde(rename = "idAwayTeam")]
    pub id_away_team: String,

    #[serde(rename = "strHomeTeam")]
    pub str_home_team: String,

    #[serde(rename = "strAwayTeam")]
    pub str_away_team: String,

    #[serde(rename = "intHomeScore")]
    pub int_home_score: Option<String>,

    #[serde(rename = "intAwayScore")]
    pub int_away_score: Option<String>,

    #[serde(rename = "dateEvent")]
    pub date_event: String,

    #[serde(rename = "strTime")]
    pub str_time: Option<String>,

    #[serde(rename = "strTimeLocal")]
    pub str_time_local: Option<String>,

    #[serde(rename = "strStatus")]
    pub str_status: Option<String>,

    #[serde(rename = "strPostponed")]
    pub str_postponed: Option<String>,

    #[serde(rename = "strVenue")]
    pub str_venue: Option<String>,

    #[serde(rename = "strSeason")]
    pub str_season: Option<String>,

    #[serde(rename = "intRound")]
    pub int_round: Option<String>,

    #[serde(rename = "intSpectators")]
    pub int_spectators: Option<String>,

    #[serde(rename = "strSport")]
    pub str_sport: Option<String>,

    #[serde(rename = "strLeague")]
    pub str_league: Option<String>,
}

/// One league as returned by league search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id_league: String,

    #[serde(rename = "strLeague")]
    pub str_league: String,

    #[serde(rename = "strSport")]
    pub str_sport: Option<String>,
}

/// Wrapper for the team list endpoints; the API sends `null` for "none".
#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    pub teams: Option<Vec<Team>>,
}

/// Wrapper for the player endpoints. The key really is singular.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayersResponse {
    pub player: Option<Vec<Player>>,
}

/// Wrapper for the event endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    pub events: Option<Vec<Event>>,
}

/// Wrapper for league search.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Option<Vec<League>>,
}
