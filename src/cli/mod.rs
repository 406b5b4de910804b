//! Command-line interface for the Sleeper tenure CLI.

pub mod args;
pub mod types;

pub use args::Tenure;
