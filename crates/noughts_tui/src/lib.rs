//! Noughts terminal front end.
//!
//! A presentation layer over [`noughts_core`]: it turns key presses into
//! session commands, renders the board, and schedules the computer's delayed
//! replies. No game rules live here.
//!
//! # Modules
//!
//! - **cli**: command-line arguments
//! - **config**: TOML settings with command-line overrides
//! - **logging**: tracing subscriber setup
//! - **simulate**: headless self-play
//! - **tui**: interactive terminal game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod simulate;
pub mod tui;

pub use config::{ConfigError, NoughtsConfig};
pub use simulate::{SimulationReport, run_simulation};
