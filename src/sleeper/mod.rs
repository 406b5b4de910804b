//! Sleeper API collaborators: typed models, HTTP client, league history
//! resolution, per-season snapshots, and the player-database cache.

pub mod cache_players;
pub mod history;
pub mod http;
pub mod season;
pub mod types;

pub use cache_players::{load_or_fetch_players, CacheStatus};
pub use history::{resolve_history, LeagueSource, SeasonLeague, EARLIEST_SEASON};
pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use season::fetch_season_records;
