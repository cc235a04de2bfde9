//! CLI mode
//!
//! Startup, runtime construction and dispatch for one command invocation.

use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::interfaces::cli::view::ViewOutcome;
use crate::interfaces::cli::{self, CliError};
use crate::runtime::lifetime::startup::prepare_cli_startup;

use super::{Mode, detect_mode};

/// Run one command and map the result to the process exit status
pub fn run_cli(args: Cli) -> ExitCode {
    match run(args) {
        Ok(ViewOutcome::Completed) => ExitCode::SUCCESS,
        Ok(ViewOutcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<ViewOutcome, CliError> {
    let overrides = args.overrides();

    match (detect_mode(&args.command), args.command) {
        (Mode::Config, Commands::Config { action }) => cli::run_config_command(action),
        (_, command) => {
            let startup = prepare_cli_startup(&overrides)?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|e| CliError::CommandError(format!("Failed to start runtime: {}", e)))?;

            runtime.block_on(cli::run_cli_command(command, &startup.config))
        }
    }
}
