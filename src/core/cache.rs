//! File-cache plumbing for the player reference database.
//!
//! The player database is a few megabytes of mostly-static JSON; Sleeper
//! asks clients to fetch it at most once a day, so it lives in the user's
//! cache directory with an mtime-based freshness check.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

/// Default maximum cache age before the player database is refetched.
pub const PLAYERS_CACHE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Path: ~/.cache/sleeper-tenure/players.json
pub fn players_cache_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sleeper-tenure").join("players.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read-through / write-through file cache for the player database.
///
/// The cache object is explicit and injectable so the fetch path stays
/// testable; nothing in the library touches the cache location implicitly.
#[derive(Debug, Clone)]
pub struct PlayerCache {
    path: PathBuf,
    max_age: Duration,
}

impl PlayerCache {
    pub fn new(path: PathBuf, max_age: Duration) -> Self {
        Self { path, max_age }
    }

    /// Cache at the default location with the default 24h expiry.
    pub fn default_location() -> Self {
        Self::new(players_cache_path(), PLAYERS_CACHE_MAX_AGE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a cache file exists and is younger than `max_age`.
    pub fn is_fresh(&self) -> bool {
        let Ok(meta) = fs::metadata(&self.path) else {
            return false;
        };
        let Ok(modified) = meta.modified() else {
            return false;
        };
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age < self.max_age,
            // Clock skew put mtime in the future; treat as fresh.
            Err(_) => true,
        }
    }

    /// Read the cached contents, fresh or not.
    pub fn read(&self) -> Option<String> {
        try_read_to_string(&self.path)
    }

    /// Overwrite the cache, creating parent directories as needed.
    pub fn write(&self, contents: &str) -> std::io::Result<()> {
        write_string(&self.path, contents)
    }
}
