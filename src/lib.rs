//! # Courtside
//!
//! A basketball league tracker built on TheSportsDB's free API.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, players, matches, standings)
//! - **sportsdb**: API client, wire types, normalization, response cache
//! - **source**: Data source trait plus the in-memory snapshot source
//! - **calculate**: Standings and statistics computed from match history
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod source;
pub mod sportsdb;

pub use models::*;
