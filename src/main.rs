mod cli;
mod config;
mod db;
mod journal;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::SqliteStore;
use utils::clock::SystemClock;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Today) => handlers::handle_today(&store, &clock)?,
        Some(Commands::Mark { prayer }) => handlers::handle_mark(&store, &clock, &prayer)?,
        Some(Commands::Score { prayer, score }) => {
            handlers::handle_score(&store, &clock, &prayer, score)?
        }
        Some(Commands::Review { prayer }) => handlers::handle_review(&store, &clock, &prayer)?,
        Some(Commands::Times) => handlers::handle_times(&config, &clock)?,
        Some(Commands::Stats) => handlers::handle_stats(&store, &clock)?,
        Some(Commands::Settings { action }) => handlers::handle_settings(&store, action.as_ref())?,
        Some(Commands::Share) => handlers::handle_share(&store, &clock)?,
        Some(Commands::Export) => handlers::handle_export(&store)?,

        // No subcommand launches the TUI
        None => tui::app::run(config, &store, &clock)?,
    }

    Ok(())
}
