//! Leaderboard and history commands

use anyhow::Result;
use chrono::Datelike;

use aura::HistoricalQuery;
use aura::api::AuraApi;
use aura::config::Config;
use aura::view::{BoardRow, NameCase, board_rows};

fn print_rows(rows: &[BoardRow]) {
    for row in rows {
        println!(
            "  {:>4}  {:<32} {:>18}  [{}]",
            row.position_label(),
            row.name,
            row.score_label(),
            row.tier.map(|t| t.id()).unwrap_or("-")
        );
    }
}

/// Print the current leaderboard
pub fn leaderboard_command(config: &Config) -> Result<()> {
    let entries = config.api_client().leaderboard()?;
    if entries.is_empty() {
        println!("No scores this month yet.");
        return Ok(());
    }

    println!("Leaderboard ({}):\n", entries.len());
    print_rows(&board_rows(&entries, &config.asset_urls(), NameCase::AsReceived));
    Ok(())
}

/// Print a past month's leaderboard
pub fn history_command(config: &Config, year: i32, month: u32) -> Result<()> {
    let current_year = chrono::Local::now().year();
    let query = HistoricalQuery::new(year, month, config.history.epoch_year, current_year)?;

    let entries = config.api_client().history(query)?;
    if entries.is_empty() {
        println!("Nothing found.");
        return Ok(());
    }

    println!("{} ({}):\n", query, entries.len());
    print_rows(&board_rows(&entries, &config.asset_urls(), NameCase::Upper));
    Ok(())
}
