//! Entry point: parse CLI and run the tenure command.

use clap::Parser;
use sleeper_tenure::{
    cli::Tenure,
    commands::{handle_tenure, TenureParams},
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Tenure::parse();

    handle_tenure(TenureParams {
        username: args.username,
        season: args.season,
        league: args.league,
        json: args.json,
        refresh: args.refresh,
        verbose: args.verbose,
    })
    .await
}
