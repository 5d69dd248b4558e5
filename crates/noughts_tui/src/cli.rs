//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::GameMode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game mode: two-player or vs-opponent
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Milliseconds the computer waits before moving
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the computer play itself and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the computer's tie-breaks
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
