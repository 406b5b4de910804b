//! Per-season snapshot fetch: draft picks and the week-1 roster.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    cli::types::{OwnerId, PlayerId},
    error::{Result, TenureError},
    sleeper::{history::SeasonLeague, http::SleeperClient, types::Roster},
    tenure::SeasonRecords,
};

/// Week-1 matchups are the authoritative "kept" snapshot; later weeks
/// reflect in-season churn.
const ROSTER_SNAPSHOT_WEEK: u8 = 1;

/// Fetch one season's draft and roster records.
///
/// Drafts, week-1 matchups, and rosters are independent reads and fetched
/// concurrently. Any failure aborts with `SeasonDataUnavailable` naming the
/// season; a season with partial data would corrupt the replay.
pub async fn fetch_season_records(
    client: &SleeperClient,
    entry: &SeasonLeague,
) -> Result<SeasonRecords> {
    let (drafts, matchups, rosters) = tokio::try_join!(
        client.league_drafts(&entry.league_id),
        client.matchups(&entry.league_id, ROSTER_SNAPSHOT_WEEK),
        client.league_rosters(&entry.league_id),
    )
    .map_err(|e| TenureError::season_unavailable(entry.season, e))?;

    // Union picks across every draft that season (startup + rookie drafts).
    let mut drafted: BTreeSet<PlayerId> = BTreeSet::new();
    for draft in &drafts {
        let picks = client
            .draft_picks(&draft.draft_id)
            .await
            .map_err(|e| TenureError::season_unavailable(entry.season, e))?;
        drafted.extend(picks.into_iter().filter_map(|p| p.player_id));
    }

    let rostered = join_week1_rosters(&matchups, &rosters);

    Ok(SeasonRecords {
        season: entry.season,
        drafted,
        rostered,
    })
}

/// Join week-1 matchup player lists with roster ownership.
///
/// Matchups carry the players each roster iced at week 1 but only a numeric
/// roster id; the rosters endpoint maps roster ids to owners.
fn join_week1_rosters(
    matchups: &[crate::sleeper::types::Matchup],
    rosters: &[Roster],
) -> BTreeMap<PlayerId, OwnerId> {
    let owners: BTreeMap<u32, OwnerId> = rosters
        .iter()
        .map(|r| (r.roster_id, r.owner_or_synthetic()))
        .collect();

    let mut rostered = BTreeMap::new();
    for matchup in matchups {
        let Some(players) = &matchup.players else {
            continue;
        };
        let owner = owners
            .get(&matchup.roster_id)
            .cloned()
            .unwrap_or_else(|| OwnerId::new(format!("roster-{}", matchup.roster_id)));
        for player in players {
            rostered.insert(player.clone(), owner.clone());
        }
    }
    rostered
}
