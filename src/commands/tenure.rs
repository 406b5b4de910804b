//! The tenure command: resolve the league, replay its history, report.

use std::collections::HashMap;

use crate::{
    cli::types::{LeagueId, OwnerId, Season},
    core::PlayerCache,
    error::{Result, TenureError},
    sleeper::{
        fetch_season_records, load_or_fetch_players, resolve_history, CacheStatus, SleeperClient,
        EARLIEST_SEASON,
    },
    sleeper::types::League,
    tenure::{compute_tenure, SeasonRecords, TenureRow},
};

use super::output::{build_display_rows, print_json, print_table};

/// Parameters for the tenure command.
#[derive(Debug)]
pub struct TenureParams {
    pub username: String,
    pub season: Season,
    /// 1-based league selection when the user is in several leagues.
    pub league: Option<usize>,
    pub json: bool,
    pub refresh: bool,
    pub verbose: bool,
}

/// Pick a league from the user's list: the requested 1-based index, or the
/// first league by default.
pub fn select_league(leagues: &[League], choice: Option<usize>) -> Result<&League> {
    let n = choice.unwrap_or(1);
    if n >= 1 && n <= leagues.len() {
        Ok(&leagues[n - 1])
    } else {
        Err(TenureError::InvalidLeagueChoice {
            choice: n,
            available: leagues.len(),
        })
    }
}

/// Core entry point: full tenure computation for one league.
///
/// Fetches the starting league record, resolves its season history, fetches
/// each season's draft and week-1 roster records in chronological order,
/// and replays them through the tenure engine. Any collaborator failure
/// aborts the run; there is no partial output.
pub async fn compute_league_tenure(
    client: &SleeperClient,
    league_id: &LeagueId,
    verbose: bool,
) -> Result<Vec<TenureRow>> {
    let start = client.league(league_id).await?;
    let history = resolve_history(client, &start, EARLIEST_SEASON).await?;

    if verbose {
        let seasons: Vec<String> = history.iter().map(|s| s.season.to_string()).collect();
        println!(
            "✓ Found {} seasons of history: {}",
            history.len(),
            seasons.join(", ")
        );
    }

    let mut seasons: Vec<SeasonRecords> = Vec::with_capacity(history.len());
    for entry in &history {
        if verbose {
            println!("  Processing {}...", entry.season);
        }
        seasons.push(fetch_season_records(client, entry).await?);
    }

    Ok(compute_tenure(&seasons))
}

/// Handle the tenure command end to end.
pub async fn handle_tenure(params: TenureParams) -> Result<()> {
    let quiet = params.json;
    let client = SleeperClient::new();

    if !quiet {
        println!("Fetching data for {}...", params.username);
    }
    let user = client.user(&params.username).await?;

    let leagues = client.user_leagues(&user.user_id, params.season).await?;
    if leagues.is_empty() {
        return Err(TenureError::NoLeagueFound {
            season: params.season,
        });
    }

    let league = select_league(&leagues, params.league)?;
    let league_name = league.name.as_deref().unwrap_or("Unknown League");
    if !quiet {
        println!("League: {}", league_name);
    }

    let rows = compute_league_tenure(&client, &league.league_id, params.verbose && !quiet).await?;

    let owner_names: HashMap<OwnerId, String> = client
        .league_users(&league.league_id)
        .await?
        .into_iter()
        .map(|u| {
            let name = u.name().to_string();
            (u.user_id, name)
        })
        .collect();

    let cache = PlayerCache::default_location();
    let (players, cache_status) = load_or_fetch_players(&client, &cache, params.refresh).await?;
    if params.verbose && !quiet {
        match cache_status {
            CacheStatus::Hit => println!("✓ Player database loaded (from cache)"),
            CacheStatus::Miss => println!("✓ Player database fetched (cache miss)"),
            CacheStatus::Refreshed => println!("✓ Player database fetched (refreshed)"),
        }
    }

    let display = build_display_rows(&rows, &players, &owner_names);
    if params.json {
        print_json(&display)?;
    } else {
        print_table(&display, league_name);
    }

    Ok(())
}
