//! The tenure engine.
//!
//! Replays a league's seasons oldest-to-newest and tracks, per player, how
//! many consecutive seasons they have been kept: on a week-1 roster without
//! being re-drafted or re-acquired from the free-agent pool. Pure function
//! over in-memory records; all I/O lives in the `sleeper` module.
//!
//! Per player the machine moves between three informal states:
//! unseen, reset-at-zero, and kept-at-n. Each season every player that has
//! ever appeared is re-evaluated:
//!
//! 1. drafted this season: counter resets to 0, whatever it was;
//! 2. on the week-1 roster and present last season (or mid-streak):
//!    counter increments by 1;
//! 3. on the week-1 roster with no prior-season footprint: counter is
//!    baselined at 0, no increment this pass;
//! 4. absent from both records: counter resets to 0 (dropped).

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::cli::types::{OwnerId, PlayerId, Season};

#[cfg(test)]
mod tests;

/// One season's input records: who was drafted, and the week-1 roster
/// snapshot with owner attribution.
#[derive(Debug, Clone)]
pub struct SeasonRecords {
    pub season: Season,
    /// Players drafted this season, by any team.
    pub drafted: BTreeSet<PlayerId>,
    /// Week-1 roster snapshot: player to owning team.
    pub rostered: BTreeMap<PlayerId, OwnerId>,
}

/// A currently-rostered player with a live keeper streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenureRow {
    pub player: PlayerId,
    pub owner: OwnerId,
    /// Consecutive seasons kept.
    pub tenure: u32,
    /// Season the current stay on a roster began (the last draft or pickup).
    pub streak_started: Option<Season>,
}

/// Replay `seasons` (ordered oldest first) and report the final counters.
///
/// Returns one row per player on the final season's roster with tenure > 0,
/// sorted by owner ascending, then tenure descending, then player id for a
/// deterministic total order. Counters are rebuilt from scratch on every
/// call; nothing is carried across runs.
pub fn compute_tenure(seasons: &[SeasonRecords]) -> Vec<TenureRow> {
    let mut counters: BTreeMap<PlayerId, u32> = BTreeMap::new();
    let mut streak_start: BTreeMap<PlayerId, Season> = BTreeMap::new();
    let mut prev_present: BTreeSet<PlayerId> = BTreeSet::new();

    for records in seasons {
        // Players in the counter map but absent from both of this season's
        // records were dropped from the league.
        let dropped: Vec<PlayerId> = counters
            .keys()
            .filter(|p| !records.drafted.contains(p) && !records.rostered.contains_key(*p))
            .cloned()
            .collect();
        for player in dropped {
            counters.insert(player.clone(), 0);
            streak_start.remove(&player);
        }

        // Drafted players always reset, even if also on the week-1 roster.
        for player in &records.drafted {
            counters.insert(player.clone(), 0);
            streak_start.insert(player.clone(), records.season);
        }

        for player in records.rostered.keys() {
            if records.drafted.contains(player) {
                continue;
            }
            let mid_streak = counters.get(player).is_some_and(|c| *c > 0);
            if mid_streak || prev_present.contains(player) {
                *counters.entry(player.clone()).or_insert(0) += 1;
                streak_start.entry(player.clone()).or_insert(records.season);
            } else {
                // First-ever appearance without a draft (waiver or free
                // agent add): establish the tenure-0 baseline, no
                // increment until next season.
                counters.insert(player.clone(), 0);
                streak_start.insert(player.clone(), records.season);
            }
        }

        prev_present = records
            .drafted
            .iter()
            .chain(records.rostered.keys())
            .cloned()
            .collect();
    }

    let mut rows = Vec::new();
    if let Some(current) = seasons.last() {
        for (player, owner) in &current.rostered {
            let tenure = counters.get(player).copied().unwrap_or(0);
            if tenure > 0 {
                rows.push(TenureRow {
                    player: player.clone(),
                    owner: owner.clone(),
                    tenure,
                    streak_started: streak_start.get(player).copied(),
                });
            }
        }
    }

    rows.sort_by(|a, b| {
        a.owner
            .cmp(&b.owner)
            .then(b.tenure.cmp(&a.tenure))
            .then(a.player.cmp(&b.player))
    });
    rows
}
