//! Serde models for the Sleeper API payloads this tool consumes.

use crate::cli::types::{LeagueId, OwnerId, PlayerId, Season, UserId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Sleeper sends season years as strings ("2024"); parse them into [`Season`].
fn de_season_str<'de, D>(deserializer: D) -> Result<Season, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    raw.parse::<u16>().map(Season::new).map_err(D::Error::custom)
}

/// User record from `/user/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperUser {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// League record from `/league/{league_id}` or `/user/{id}/leagues/nfl/{season}`.
///
/// `previous_league_id` is the backward link the history resolver walks.
#[derive(Debug, Clone, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "de_season_str")]
    pub season: Season,
    #[serde(default)]
    pub previous_league_id: Option<LeagueId>,
}

/// Draft record from `/league/{league_id}/drafts`.
#[derive(Debug, Clone, Deserialize)]
pub struct Draft {
    pub draft_id: String,
}

/// A single pick from `/draft/{draft_id}/picks`.
///
/// `player_id` is null for skipped/forfeited picks.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftPick {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
}

/// One roster's side of a matchup, from `/league/{league_id}/matchups/{week}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Matchup {
    pub roster_id: u32,
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
}

/// Roster record from `/league/{league_id}/rosters`.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<OwnerId>,
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
}

impl Roster {
    /// Owner of this roster, or a synthetic id for orphaned rosters.
    pub fn owner_or_synthetic(&self) -> OwnerId {
        self.owner_id
            .clone()
            .unwrap_or_else(|| OwnerId::new(format!("roster-{}", self.roster_id)))
    }
}

/// League member from `/league/{league_id}/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueUser {
    pub user_id: OwnerId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl LeagueUser {
    /// Best available display name for this member.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_else(|| self.user_id.as_str())
    }
}

/// Entry in the full player database from `/players/nfl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// The full player database, keyed by player id.
pub type PlayerMap = HashMap<PlayerId, PlayerInfo>;

impl PlayerInfo {
    /// "First Last" for the player, with the team-defense fallback.
    ///
    /// Team defenses have no name or position; render them as "SF DEF".
    pub fn full_name(&self, player_id: &PlayerId) -> String {
        if self.first_name.is_none() && self.position.is_none() {
            if let Some(team) = &self.team {
                return format!("{} DEF", team);
            }
        }

        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
        );
        let name = name.trim();
        if name.is_empty() {
            player_id.to_string()
        } else {
            name.to_string()
        }
    }

    /// Position label, "DEF" for team defenses, empty if unknown.
    pub fn position_label(&self) -> &str {
        match self.position.as_deref() {
            Some(pos) => pos,
            None if self.team.is_some() && self.first_name.is_none() => "DEF",
            None => "",
        }
    }
}
