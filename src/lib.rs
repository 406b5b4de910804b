//! Sleeper Player Tenure CLI Library
//!
//! Computes, for a Sleeper dynasty fantasy-football league, how many
//! consecutive seasons each player has been kept: on a week-1 roster
//! without being re-drafted or re-acquired from waivers/free agency.
//!
//! ## How it works
//!
//! 1. **History resolution** — the league's `previous_league_id` chain is
//!    walked backward to the earliest season, producing an ordered list of
//!    season/league pairs.
//! 2. **Tenure replay** — each season's draft picks and week-1 rosters are
//!    fetched and replayed oldest-first through a pure state machine that
//!    tracks a per-player keeper counter. Drafting always resets a
//!    counter; an uninterrupted roster stay increments it once per season;
//!    dropping out of the league resets it.
//!
//! Counters are rebuilt from scratch on every run; the only local state is
//! a 24-hour file cache of the Sleeper player database used to render
//! names.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_tenure::{commands::compute_league_tenure, sleeper::SleeperClient, LeagueId};
//!
//! # async fn example() -> sleeper_tenure::Result<()> {
//! let client = SleeperClient::new();
//! let rows = compute_league_tenure(&client, &LeagueId::new("987654321"), false).await?;
//! for row in rows {
//!     println!("{} kept {} seasons", row.player, row.tenure);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod sleeper;
pub mod tenure;

// Re-export commonly used types
pub use cli::types::{LeagueId, OwnerId, PlayerId, Season, UserId};
pub use error::{Result, TenureError};
pub use tenure::{compute_tenure, SeasonRecords, TenureRow};
