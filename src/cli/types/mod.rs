//! Strongly-typed identifiers shared across the CLI and library.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, OwnerId, PlayerId, UserId};
pub use time::Season;
