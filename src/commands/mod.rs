//! Command implementations for the Sleeper tenure CLI.

pub mod output;
pub mod tenure;

pub use tenure::{compute_league_tenure, handle_tenure, select_league, TenureParams};
