//! Error types for the Sleeper tenure CLI

use thiserror::Error;

use crate::cli::types::{LeagueId, Season};

pub type Result<T> = std::result::Result<T, TenureError>;

#[derive(Error, Debug)]
pub enum TenureError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse season year: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Sleeper API returned no data")]
    NoData,

    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("No leagues found for season {season}")]
    NoLeagueFound { season: Season },

    #[error("League number must be between 1 and {available}, got {choice}")]
    InvalidLeagueChoice { choice: usize, available: usize },

    #[error("League history unavailable at league {league_id}")]
    HistoryUnavailable {
        league_id: LeagueId,
        #[source]
        source: Box<TenureError>,
    },

    #[error("Season data unavailable for {season}")]
    SeasonDataUnavailable {
        season: Season,
        #[source]
        source: Box<TenureError>,
    },
}

impl TenureError {
    /// Wrap a collaborator failure from the history walk.
    pub fn history_unavailable(league_id: LeagueId, source: TenureError) -> Self {
        TenureError::HistoryUnavailable {
            league_id,
            source: Box::new(source),
        }
    }

    /// Wrap a collaborator failure from a per-season fetch.
    pub fn season_unavailable(season: Season, source: TenureError) -> Self {
        TenureError::SeasonDataUnavailable {
            season,
            source: Box::new(source),
        }
    }
}
