//! ID types for the Sleeper API.
//!
//! Sleeper identifiers are opaque strings; these wrappers keep league,
//! player, user, and roster-owner IDs from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// # Examples
///
/// ```rust
/// use sleeper_tenure::LeagueId;
///
/// let league_id = LeagueId::new("987654321");
/// assert_eq!(league_id.as_str(), "987654321");
/// assert_eq!(league_id.to_string(), "987654321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    /// Create a new LeagueId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for Sleeper player IDs.
///
/// Usually a numeric string ("4034"); team defenses use the team
/// abbreviation ("SF") as their ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for Sleeper user account IDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for roster-owner IDs within a league.
///
/// Owner IDs are user IDs of the roster's current owner; orphaned rosters
/// fall back to a synthetic `roster-{n}` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_roundtrip() {
        let id: LeagueId = "123456789".parse().unwrap();
        assert_eq!(id, LeagueId::new("123456789"));
        assert_eq!(id.to_string(), "123456789");
    }

    #[test]
    fn test_player_id_ordering() {
        let a = PlayerId::new("1000");
        let b = PlayerId::new("999");
        // Lexicographic, not numeric: IDs are opaque.
        assert!(a < b);
    }

    #[test]
    fn test_owner_id_transparent_serde() {
        let owner: OwnerId = serde_json::from_str("\"556677\"").unwrap();
        assert_eq!(owner.as_str(), "556677");
        assert_eq!(serde_json::to_string(&owner).unwrap(), "\"556677\"");
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new("42").to_string(), "42");
    }
}
