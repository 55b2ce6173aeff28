//! tripline library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, &cli.command, cfg),
        Commands::Trips => cli::commands::trips::handle(cfg),
        Commands::Show { trip, json } => {
            cli::commands::show::handle(cfg, trip.as_deref(), *json).await
        }
        Commands::Calendar { month, json } => {
            cli::commands::calendar::handle(cfg, month.as_deref(), *json).await
        }
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; --config overrides the file path.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg).await
}
