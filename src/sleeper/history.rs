//! League history resolution.
//!
//! Sleeper links each league season to its predecessor through
//! `previous_league_id`. Resolving history means walking that chain
//! backward from the current season and reversing it, so the tenure
//! replay can run oldest-first.

use std::collections::HashSet;
use std::future::Future;

use crate::{
    cli::types::{LeagueId, Season},
    error::{Result, TenureError},
    sleeper::{http::SleeperClient, types::League},
};

/// Earliest season the resolver will walk back to (Sleeper launched in 2017).
pub const EARLIEST_SEASON: Season = Season(2017);

/// One season of league history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonLeague {
    pub season: Season,
    pub league_id: LeagueId,
}

/// Collaborator that can look up league records by id.
///
/// The HTTP client implements this; tests use an in-memory map.
pub trait LeagueSource {
    fn league(&self, league_id: &LeagueId) -> impl Future<Output = Result<League>> + Send;
}

impl LeagueSource for SleeperClient {
    fn league(&self, league_id: &LeagueId) -> impl Future<Output = Result<League>> + Send {
        SleeperClient::league(self, league_id)
    }
}

/// Walk the predecessor chain from `start` down to `floor`, oldest first.
///
/// The starting league record is already in hand (it came from the league
/// listing), so only predecessors are fetched. A lookup failure anywhere in
/// the chain fails the whole resolution with `HistoryUnavailable`; the
/// chain is never silently truncated. A seen-set guards against a
/// self-referencing or cyclic chain in addition to the floor cutoff.
pub async fn resolve_history<S: LeagueSource>(
    source: &S,
    start: &League,
    floor: Season,
) -> Result<Vec<SeasonLeague>> {
    let mut chain = vec![SeasonLeague {
        season: start.season,
        league_id: start.league_id.clone(),
    }];

    let mut seen: HashSet<LeagueId> = HashSet::new();
    seen.insert(start.league_id.clone());

    let mut prev_id = start.previous_league_id.clone();
    while let Some(league_id) = prev_id {
        if !seen.insert(league_id.clone()) {
            break;
        }

        let league = source.league(&league_id).await.map_err(|e| match e {
            already @ TenureError::HistoryUnavailable { .. } => already,
            other => TenureError::history_unavailable(league_id.clone(), other),
        })?;

        if league.season < floor {
            break;
        }

        chain.push(SeasonLeague {
            season: league.season,
            league_id: league.league_id,
        });
        prev_id = league.previous_league_id;
    }

    chain.reverse();
    Ok(chain)
}
