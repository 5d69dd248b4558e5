//! Noughts - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts_tui::cli::{Cli, Command};
use noughts_tui::logging::{init_file_logging, init_stderr_logging};
use noughts_tui::{NoughtsConfig, run_simulation, tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            delay_ms,
            seed,
        } => {
            let config =
                NoughtsConfig::load(config.as_deref())?.with_overrides(mode, delay_ms, seed);
            init_file_logging(config.log_file())?;
            tui::run_tui(config).await
        }
        Command::Simulate { games, seed, json } => {
            init_stderr_logging()?;
            let report = run_simulation(games, seed);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
    }
}
