//! Mode routing
//!
//! - Config mode: `config ...` subcommands, which work without a loadable
//!   configuration
//! - View mode: every command that talks to the shortener API or needs its
//!   settings

pub mod cli;

pub use cli::run_cli;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Config,
    View,
}

/// Detect which mode to run based on the parsed command
pub fn detect_mode(command: &Commands) -> Mode {
    match command {
        Commands::Config { .. } => Mode::Config,
        _ => Mode::View,
    }
}
