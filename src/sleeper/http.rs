//! Async client for the Sleeper read-only API.
//!
//! Sleeper's API is public and unauthenticated; unknown resources come back
//! as HTTP 404 or as a literal JSON `null` body, both of which are treated
//! as "not found" rather than hard failures here. Callers decide whether a
//! miss is an error.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    cli::types::{LeagueId, Season, UserId},
    error::{Result, TenureError},
    sleeper::types::{Draft, DraftPick, League, LeagueUser, Matchup, PlayerMap, Roster, SleeperUser},
};

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// HTTP client for Sleeper endpoints.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Self {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    /// Point the client at a different base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET a JSON resource, mapping 404 and `null` bodies to `None`.
    async fn get_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(resp.error_for_status()?.json::<Option<T>>().await?)
    }

    /// Resolve a username to its user record.
    pub async fn user(&self, username: &str) -> Result<SleeperUser> {
        self.get_opt(&format!("user/{}", username))
            .await?
            .ok_or_else(|| TenureError::UserNotFound {
                username: username.to_string(),
            })
    }

    /// All NFL leagues the user belongs to in a season.
    pub async fn user_leagues(&self, user_id: &UserId, season: Season) -> Result<Vec<League>> {
        Ok(self
            .get_opt(&format!("user/{}/leagues/nfl/{}", user_id, season))
            .await?
            .unwrap_or_default())
    }

    /// A single league record (carries `previous_league_id` and `season`).
    pub async fn league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_opt(&format!("league/{}", league_id))
            .await?
            .ok_or_else(|| {
                TenureError::history_unavailable(league_id.clone(), TenureError::NoData)
            })
    }

    /// League members, for owner display names.
    pub async fn league_users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        Ok(self
            .get_opt(&format!("league/{}/users", league_id))
            .await?
            .unwrap_or_default())
    }

    /// Rosters for a league, mapping roster slots to owners and players.
    pub async fn league_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        Ok(self
            .get_opt(&format!("league/{}/rosters", league_id))
            .await?
            .unwrap_or_default())
    }

    /// Drafts held in a league season (startup + rookie drafts).
    pub async fn league_drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        Ok(self
            .get_opt(&format!("league/{}/drafts", league_id))
            .await?
            .unwrap_or_default())
    }

    /// Every pick from one draft.
    pub async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        Ok(self
            .get_opt(&format!("draft/{}/picks", draft_id))
            .await?
            .unwrap_or_default())
    }

    /// Matchups for a week; week 1 is the kept-roster snapshot.
    pub async fn matchups(&self, league_id: &LeagueId, week: u8) -> Result<Vec<Matchup>> {
        Ok(self
            .get_opt(&format!("league/{}/matchups/{}", league_id, week))
            .await?
            .unwrap_or_default())
    }

    /// The full NFL player database. Large; cache it (see `cache_players`).
    pub async fn players(&self) -> Result<PlayerMap> {
        Ok(self.get_opt("players/nfl").await?.unwrap_or_default())
    }
}

impl Default for SleeperClient {
    fn default() -> Self {
        Self::new()
    }
}
