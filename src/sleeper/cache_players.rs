//! Read-through cache for the Sleeper player database.

use crate::{
    core::PlayerCache,
    error::Result,
    sleeper::{http::SleeperClient, types::PlayerMap},
};

/// Where the player database came from on this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Load the player database from cache, or fetch and write it back.
///
/// Cache policy: read-through on miss or staleness, write-through on a
/// successful fetch. `refresh == true` skips the cache read entirely. A
/// failed cache write is non-fatal; the fetched data is still returned.
pub async fn load_or_fetch_players(
    client: &SleeperClient,
    cache: &PlayerCache,
    refresh: bool,
) -> Result<(PlayerMap, CacheStatus)> {
    if !refresh && cache.is_fresh() {
        if let Some(s) = cache.read() {
            if let Ok(players) = serde_json::from_str::<PlayerMap>(&s) {
                return Ok((players, CacheStatus::Hit));
            }
        }
    }

    let players = client.players().await?;

    if let Ok(json_str) = serde_json::to_string(&players) {
        let _ = cache.write(&json_str);
    }

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((players, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::PlayerId;
    use crate::core::cache::PLAYERS_CACHE_MAX_AGE;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fresh_cache_is_a_hit() {
        let dir = tempdir().unwrap();
        let cache = PlayerCache::new(dir.path().join("players.json"), PLAYERS_CACHE_MAX_AGE);
        cache
            .write(r#"{"4034":{"first_name":"Josh","last_name":"Allen","position":"QB"}}"#)
            .unwrap();

        // Client never contacted on a hit; an unroutable base URL proves it.
        let client = SleeperClient::with_base_url("http://127.0.0.1:1/v1");
        let (players, status) = load_or_fetch_players(&client, &cache, false).await.unwrap();

        assert_eq!(status, CacheStatus::Hit);
        assert_eq!(
            players[&PlayerId::new("4034")].first_name.as_deref(),
            Some("Josh")
        );
    }

    #[tokio::test]
    async fn test_corrupt_cache_falls_through_to_fetch() {
        let dir = tempdir().unwrap();
        let cache = PlayerCache::new(dir.path().join("players.json"), PLAYERS_CACHE_MAX_AGE);
        cache.write("not json at all").unwrap();

        let client = SleeperClient::with_base_url("http://127.0.0.1:1/v1");
        let result = load_or_fetch_players(&client, &cache, false).await;

        // The fetch fails (nothing is listening), but the point is the
        // corrupt cache was not served as a hit.
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_refresh_skips_fresh_cache() {
        let dir = tempdir().unwrap();
        let cache = PlayerCache::new(dir.path().join("players.json"), PLAYERS_CACHE_MAX_AGE);
        cache.write("{}").unwrap();

        let client = SleeperClient::with_base_url("http://127.0.0.1:1/v1");
        let result = load_or_fetch_players(&client, &cache, true).await;

        assert!(result.is_err());
    }
}
