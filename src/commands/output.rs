//! Result rendering: fixed-width table or JSON.

use serde::Serialize;
use std::collections::HashMap;

use crate::{
    cli::types::{OwnerId, Season},
    error::Result,
    sleeper::types::PlayerMap,
    tenure::TenureRow,
};

/// A tenure row with names resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRow {
    pub player: String,
    pub position: String,
    pub owner: String,
    pub tenure: u32,
    pub since: Option<Season>,
}

/// Resolve player and owner names and order rows for display.
///
/// Display order follows owner display names case-insensitively (the
/// engine's contractual order is by raw owner id), then tenure descending.
pub fn build_display_rows(
    rows: &[TenureRow],
    players: &PlayerMap,
    owner_names: &HashMap<OwnerId, String>,
) -> Vec<DisplayRow> {
    let mut display: Vec<DisplayRow> = rows
        .iter()
        .map(|row| {
            let info = players.get(&row.player).cloned().unwrap_or_default();
            let owner = owner_names
                .get(&row.owner)
                .cloned()
                .unwrap_or_else(|| row.owner.to_string());
            DisplayRow {
                player: info.full_name(&row.player),
                position: info.position_label().to_string(),
                owner,
                tenure: row.tenure,
                since: row.streak_started,
            }
        })
        .collect();

    display.sort_by(|a, b| {
        a.owner
            .to_lowercase()
            .cmp(&b.owner.to_lowercase())
            .then(b.tenure.cmp(&a.tenure))
            .then(a.player.cmp(&b.player))
    });
    display
}

/// Print results as a fixed-width text table.
pub fn print_table(rows: &[DisplayRow], league_name: &str) {
    let col_player = width(rows.iter().map(|r| r.player.len()), "Player");
    let col_pos = width(rows.iter().map(|r| r.position.len()), "Pos");
    let col_owner = width(rows.iter().map(|r| r.owner.len()), "Owner");
    let col_tenure = "Tenure".len();
    let col_since = "Since".len();

    println!();
    println!("Player Tenure - {}", league_name);
    let header = format!(
        "{:<col_player$}  {:<col_pos$}  {:<col_owner$}  {:>col_tenure$}  {:>col_since$}",
        "Player", "Pos", "Owner", "Tenure", "Since"
    );
    println!("{header}");
    println!("{}", "=".repeat(header.len()));

    for r in rows {
        let since = r.since.map(|s| s.to_string()).unwrap_or_else(|| "N/A".into());
        println!(
            "{:<col_player$}  {:<col_pos$}  {:<col_owner$}  {:>col_tenure$}  {:>col_since$}",
            r.player, r.position, r.owner, r.tenure, since
        );
    }

    println!();
    println!("Total players with tenure: {}", rows.len());
}

/// Print results as pretty JSON.
pub fn print_json(rows: &[DisplayRow]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn width(lens: impl Iterator<Item = usize>, header: &str) -> usize {
    lens.max().unwrap_or(0).max(header.len())
}
