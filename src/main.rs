use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside::calculate::{
    compute_head_to_head, compute_league_stats, compute_standings, compute_team_stats,
};
use courtside::config::AppConfig;
use courtside::models::{GameOutcome, Match, MatchLog, MatchStatus, MeetingWinner, Team, TeamId};
use courtside::source::{self, LeagueDataSource, MemorySource};
use courtside::sportsdb::Client;

#[derive(Parser)]
#[command(name = "courtside")]
#[command(about = "Basketball league tracker with standings and statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); defaults to the config value
    #[arg(long)]
    log_level: Option<String>,

    /// Serve data from a JSON snapshot file instead of the live API
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Skip cache reads and refetch everything
    #[arg(long)]
    refresh: bool,

    /// Output format: "table" or "json"
    #[arg(long, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every team in the league
    Teams,

    /// Show one team's profile and computed statistics
    Team {
        /// Team id
        id: String,
    },

    /// List a team's roster, or every roster in the league
    Players {
        /// Team id; lists the whole league when omitted
        #[arg(long)]
        team: Option<String>,
    },

    /// List matches from the aggregated league log
    Matches {
        /// Only show matches with this status
        /// (scheduled, live, finished, postponed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Compute the league table from finished matches
    Standings,

    /// Head-to-head record between two teams
    Compare {
        /// First team id
        team_a: String,

        /// Second team id
        team_b: String,
    },

    /// League-wide records and totals
    League,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = match cli.output.as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown output format {:?} (expected table or json)", other),
    };

    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize tracing: RUST_LOG wins, then --log-level, then the config.
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting courtside v{}", env!("CARGO_PKG_VERSION"));

    let source: Box<dyn LeagueDataSource> = match &cli.snapshot {
        Some(path) => Box::new(MemorySource::from_snapshot(path)?),
        None => {
            let mut client_config = config.client_config();
            client_config.bypass_cache = cli.refresh;
            Box::new(Client::new(client_config)?)
        }
    };
    let source = source.as_ref();

    match cli.command {
        Commands::Teams => {
            let teams = source.teams().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&teams)?);
                return Ok(());
            }

            println!("{:<10} {:<28} {:<18} {}", "ID", "TEAM", "CITY", "ARENA");
            for team in &teams {
                println!(
                    "{:<10} {:<28} {:<18} {}",
                    team.id, team.name, team.city, team.arena
                );
            }
            println!("\n{} teams", teams.len());
        }

        Commands::Team { id } => {
            let id = TeamId::from(id.as_str());
            let team = match source.team(&id).await? {
                Some(team) => team,
                None => anyhow::bail!("No team with id {}", id),
            };
            let log = MatchLog::new(source.team_matches(&id).await?);
            let stats = compute_team_stats(&team, &log);

            if json {
                let combined = serde_json::json!({ "team": team, "stats": stats });
                println!("{}", serde_json::to_string_pretty(&combined)?);
                return Ok(());
            }

            println!("=== {} ===\n", team.name);
            println!("City:             {}", team.city);
            println!("Country:          {}", team.country);
            match team.capacity {
                Some(capacity) => println!("Arena:            {} ({})", team.arena, capacity),
                None => println!("Arena:            {}", team.arena),
            }
            if let Some(founded) = team.founded {
                println!("Founded:          {}", founded);
            }

            println!("\nRecord:           {}-{}", stats.won, stats.lost);
            println!("Win percentage:   {:.3}", stats.win_percentage);
            println!(
                "Points per game:  {:.1} scored, {:.1} conceded",
                stats.avg_points_scored, stats.avg_points_conceded
            );
            println!("Home record:      {}", stats.home_record);
            println!("Away record:      {}", stats.away_record);
            println!("Form:             {}", form_guide(&stats.last_five));
            println!("Streak:           {}", stats.current_streak);
        }

        Commands::Players { team } => {
            let players = match &team {
                Some(id) => source.team_players(&TeamId::from(id.as_str())).await?,
                None => source::all_players(source).await?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&players)?);
                return Ok(());
            }

            println!(
                "{:<26} {:<24} {:<5} {:<16} {:<8} {}",
                "NAME", "TEAM", "POS", "NATIONALITY", "HEIGHT", "BORN"
            );
            for player in &players {
                println!(
                    "{:<26} {:<24} {:<5} {:<16} {:<8} {}",
                    player.name,
                    player.team_name.as_deref().unwrap_or("-"),
                    player.position,
                    player.nationality,
                    player.height.as_deref().unwrap_or("-"),
                    player
                        .date_of_birth
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string())
                );
            }
            println!("\n{} players", players.len());
        }

        Commands::Matches { status } => {
            let wanted = status.as_deref().map(parse_status).transpose()?;
            let log = source::all_matches(source).await?;
            let matches: Vec<&Match> = log
                .iter()
                .filter(|m| wanted.map_or(true, |status| m.status == status))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
                return Ok(());
            }

            println!(
                "{:<12} {:<6} {:<24} {:^9} {:<24} {}",
                "DATE", "TIME", "HOME", "SCORE", "AWAY", "STATUS"
            );
            for m in &matches {
                println!(
                    "{:<12} {:<6} {:<24} {:^9} {:<24} {}",
                    m.date, m.time, m.home_team_name, score_column(m), m.away_team_name, m.status
                );
            }
            println!("\n{} matches", matches.len());
        }

        Commands::Standings => {
            let teams = source.teams().await?;
            let log = source::all_matches(source).await?;
            let standings = compute_standings(&teams, &log);

            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
                return Ok(());
            }

            println!(
                "{:<4} {:<28} {:>3} {:>3} {:>6} {:>6} {:>6} {:>6}  {}",
                "#", "TEAM", "W", "L", "PCT", "PF", "PA", "DIFF", "STRK"
            );
            for (rank, row) in standings.iter().enumerate() {
                println!(
                    "{:<4} {:<28} {:>3} {:>3} {:>6.3} {:>6} {:>6} {:>+6}  {}",
                    rank + 1,
                    row.team_name,
                    row.won,
                    row.lost,
                    row.win_percentage,
                    row.points_for,
                    row.points_against,
                    row.points_diff,
                    row.streak
                );
            }
        }

        Commands::Compare { team_a, team_b } => {
            let a = TeamId::from(team_a.as_str());
            let b = TeamId::from(team_b.as_str());
            let log = source::all_matches(source).await?;
            let h2h = compute_head_to_head(&a, &b, &log);

            if json {
                println!("{}", serde_json::to_string_pretty(&h2h)?);
                return Ok(());
            }

            let name_a = team_name(source, &a).await?;
            let name_b = team_name(source, &b).await?;

            println!("=== {} vs {} ===\n", name_a, name_b);
            println!("Meetings:         {}", h2h.total_meetings);
            println!("{:<18}{}", format!("{} wins:", name_a), h2h.team_a_wins);
            println!("{:<18}{}", format!("{} wins:", name_b), h2h.team_b_wins);
            println!("Draws:            {}", h2h.draws);
            println!(
                "Average score:    {:.1} - {:.1}",
                h2h.avg_score_a, h2h.avg_score_b
            );

            if !h2h.last_meetings.is_empty() {
                println!("\nLast meetings:");
                for meeting in &h2h.last_meetings {
                    let outcome = match meeting.winner {
                        MeetingWinner::TeamA => name_a.as_str(),
                        MeetingWinner::TeamB => name_b.as_str(),
                        MeetingWinner::Draw => "draw",
                    };
                    println!(
                        "  {}  {:>3} - {:<3}  ({})",
                        meeting.date, meeting.team_a_score, meeting.team_b_score, outcome
                    );
                }
            }
        }

        Commands::League => {
            let teams = source.teams().await?;
            let log = source::all_matches(source).await?;
            let stats = compute_league_stats(&teams, &log);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("=== League Overview ===\n");
            println!("Games played:     {}", stats.total_games);
            println!("Average score:    {:.1}", stats.average_score);

            if let Some(record) = &stats.highest_score {
                println!(
                    "Highest score:    {} by {} on {}",
                    record.score, record.team, record.date
                );
            }
            if let Some(record) = &stats.lowest_score {
                println!(
                    "Lowest score:     {} by {} on {}",
                    record.score, record.team, record.date
                );
            }
            if let Some(win) = &stats.biggest_win {
                println!(
                    "Biggest win:      {} over {} by {} on {}",
                    win.winner, win.loser, win.margin, win.date
                );
            }

            if !stats.top_scorers.is_empty() {
                println!("\nTop scorers:");
                for (rank, scorer) in stats.top_scorers.iter().enumerate() {
                    println!(
                        "  {:>2}. {:<28} {:>6.1} ppg",
                        rank + 1,
                        scorer.team_name,
                        scorer.average_points
                    );
                }
            }
        }
    }

    Ok(())
}

/// Resolve a team's display name, falling back to its id.
async fn team_name(source: &dyn LeagueDataSource, id: &TeamId) -> Result<String> {
    Ok(source
        .team(id)
        .await?
        .map(|team: Team| team.name)
        .unwrap_or_else(|| id.to_string()))
}

/// Parse a status filter argument.
fn parse_status(s: &str) -> Result<MatchStatus> {
    match s.to_lowercase().as_str() {
        "scheduled" => Ok(MatchStatus::Scheduled),
        "live" => Ok(MatchStatus::Live),
        "finished" => Ok(MatchStatus::Finished),
        "postponed" => Ok(MatchStatus::Postponed),
        other => anyhow::bail!(
            "Unknown status {:?} (expected scheduled, live, finished, or postponed)",
            other
        ),
    }
}

/// Format a match's score column; unplayed games show a dash.
fn score_column(m: &Match) -> String {
    match (m.home_score, m.away_score) {
        (Some(home), Some(away)) => format!("{:>3}-{:<3}", home, away),
        _ => "  -".to_string(),
    }
}

/// Render recent outcomes as a short form guide, most recent first.
fn form_guide(outcomes: &[GameOutcome]) -> String {
    if outcomes.is_empty() {
        return "-".to_string();
    }
    outcomes
        .iter()
        .map(|outcome| outcome.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
