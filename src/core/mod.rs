//! Core utilities shared across the Sleeper tenure CLI.

pub mod cache;

pub use cache::{players_cache_path, try_read_to_string, write_string, PlayerCache};
