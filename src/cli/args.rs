//! CLI argument definitions and parsing structures.

use super::types::Season;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-tenure",
    about = "Calculate player keeper tenure for Sleeper fantasy football leagues"
)]
pub struct Tenure {
    /// Sleeper username whose league to analyze.
    pub username: String,

    /// Season year (e.g. 2025).
    #[clap(default_value_t = Season::default())]
    pub season: Season,

    /// Select league number N when the user is in more than one (default: first).
    #[clap(long, short)]
    pub league: Option<usize>,

    /// Output result rows as JSON instead of a table.
    #[clap(long)]
    pub json: bool,

    /// Force refresh of the cached player database.
    #[clap(long)]
    pub refresh: bool,

    /// Print per-season progress while replaying league history.
    #[clap(long, short)]
    pub verbose: bool,
}
