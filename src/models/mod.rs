//! Core data models for the league tracker.

mod ids;
mod matches;
mod player;
mod stats;
mod team;

pub use ids::*;
pub use matches::*;
pub use player::*;
pub use stats::*;
pub use team::*;
