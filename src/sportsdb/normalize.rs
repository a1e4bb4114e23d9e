//! Wire-to-model normalization.
//!
//! Converts the loose string-typed payloads in [`super::wire`] into the typed
//! models the rest of the crate works with. Normalization is permissive:
//! unparseable numbers become absent values, display fields fall back to
//! fixed placeholders, and the only thing that drops a whole event is a
//! missing or unparseable date.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{Match, MatchStatus, Player, Team};

use super::wire;

/// Normalize a raw team.
pub fn normalize_team(raw: &wire::Team) -> Team {
    Team {
        id: raw.id_team.clone().into(),
        name: raw.str_team.clone(),
        short_name: raw.str_team_short.clone().filter(|s| !s.is_empty()),
        city: non_empty(raw.str_stadium_location.as_deref())
            .or_else(|| non_empty(raw.str_country.as_deref()))
            .unwrap_or("Unknown")
            .to_string(),
        country: non_empty(raw.str_country.as_deref())
            .unwrap_or("Unknown")
            .to_string(),
        arena: non_empty(raw.str_stadium.as_deref())
            .unwrap_or("Unknown Arena")
            .to_string(),
        capacity: parse_number(raw.int_stadium_capacity.as_deref()),
        founded: parse_number(raw.int_formed_year.as_deref()),
        description: raw.str_description_en.clone().filter(|s| !s.is_empty()),
    }
}

/// Normalize a raw player.
pub fn normalize_player(raw: &wire::Player) -> Player {
    Player {
        id: raw.id_player.clone().into(),
        team_id: non_empty(raw.id_team.as_deref()).map(Into::into),
        team_name: raw.str_team.clone().filter(|s| !s.is_empty()),
        name: raw.str_player.clone(),
        position: position_code(raw.str_position.as_deref()),
        nationality: non_empty(raw.str_nationality.as_deref())
            .unwrap_or("Unknown")
            .to_string(),
        height: raw.str_height.clone().filter(|s| !s.is_empty()),
        weight: raw.str_weight.clone().filter(|s| !s.is_empty()),
        date_of_birth: non_empty(raw.date_born.as_deref())
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
    }
}

/// Normalize a raw event into a match.
///
/// Returns `None` for events whose date cannot be parsed; everything else
/// survives with placeholder or absent fields. A half-reported result (one
/// score present, one missing) keeps the derived status but loses the lone
/// score, preserving the both-or-neither score invariant.
pub fn normalize_match(raw: &wire::Event) -> Option<Match> {
    let date = match NaiveDate::parse_from_str(&raw.date_event, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            warn!(
                "Dropping event {} with unparseable date {:?}",
                raw.id_event, raw.date_event
            );
            return None;
        }
    };

    let mut home_score = parse_number(raw.int_home_score.as_deref());
    let mut away_score = parse_number(raw.int_away_score.as_deref());

    // Status is derived from the scores as reported, before invariant repair.
    let status = derive_status(raw, home_score, away_score);

    if home_score.is_some() != away_score.is_some() {
        warn!("Dropping lone score from half-reported event {}", raw.id_event);
        home_score = None;
        away_score = None;
    }

    let time: String = non_empty(raw.str_time.as_deref())
        .or_else(|| non_empty(raw.str_time_local.as_deref()))
        .unwrap_or("20:00")
        .chars()
        .take(5)
        .collect();

    Some(Match {
        id: raw.id_event.clone().into(),
        home_team: raw.id_home_team.clone().into(),
        away_team: raw.id_away_team.clone().into(),
        home_team_name: raw.str_home_team.clone(),
        away_team_name: raw.str_away_team.clone(),
        home_score,
        away_score,
        date,
        time,
        status,
        venue: non_empty(raw.str_venue.as_deref())
            .unwrap_or("TBD")
            .to_string(),
        season: raw.str_season.clone().filter(|s| !s.is_empty()),
        round: parse_number(raw.int_round.as_deref()),
        attendance: parse_number(raw.int_spectators.as_deref()),
    })
}

/// Whether a mixed team event feed entry belongs to the given sport. Team
/// feeds can carry other sports played by same-name clubs, so events are
/// matched on their sport field or, failing that, on the league name.
pub(crate) fn matches_sport(event: &wire::Event, sport: &str) -> bool {
    event.str_sport.as_deref() == Some(sport)
        || event
            .str_league
            .as_deref()
            .map_or(false, |league| league.contains(sport))
}

/// Status derivation, in upstream priority order: an explicit postponement
/// wins, then full-time or a complete scoreline means finished, then any
/// other non-"NS" status means live, and everything else is scheduled.
fn derive_status(
    raw: &wire::Event,
    home_score: Option<u32>,
    away_score: Option<u32>,
) -> MatchStatus {
    if raw.str_postponed.as_deref() == Some("yes") {
        return MatchStatus::Postponed;
    }
    let status = non_empty(raw.str_status.as_deref());
    if status == Some("FT") || (home_score.is_some() && away_score.is_some()) {
        return MatchStatus::Finished;
    }
    match status {
        Some(s) if s != "NS" => MatchStatus::Live,
        _ => MatchStatus::Scheduled,
    }
}

/// Map the long upstream position labels to short codes; anything
/// unmapped passes through untouched.
fn position_code(position: Option<&str>) -> String {
    let code = match non_empty(position) {
        Some("Guard") => "G",
        Some("Point Guard") => "PG",
        Some("Shooting Guard") => "SG",
        Some("Forward") => "F",
        Some("Small Forward") => "SF",
        Some("Power Forward") => "PF",
        Some("Center") => "C",
        Some(other) => other,
        None => "Unknown",
    };
    code.to_string()
}

/// Empty upstream strings mean "absent".
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Numeric strings arrive as text; anything unparseable reads as absent.
fn parse_number(value: Option<&str>) -> Option<u32> {
    non_empty(value).and_then(|s| s.parse().ok())
}
