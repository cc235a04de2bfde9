//! CLI interface module
//!
//! Each subcommand is one view over the shortener API. Views write to stdout
//! and report a [`ViewOutcome`]; errors that stop a command before a view can
//! render are returned as [`CliError`].

pub mod commands;
pub mod render;
pub mod view;

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use crate::cli::{Commands, ConfigCommands};
use crate::client::{ApiClient, RedirectUrlBuilder};
use crate::config::ClientConfig;
use crate::errors::ShortenerError;
use commands::{
    config_management, create_url, delete_url, edit_url, list_urls, print_link, show_stats,
};
use view::ViewOutcome;

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ConfigError(msg) => format!("Configuration error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ConfigError(msg) => {
                format!("{} {}", "Configuration error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShortenerError> for CliError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ApiError(other.format_simple()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::CommandError(format!("I/O error: {}", err))
    }
}

/// Run a config subcommand. Needs no loaded configuration.
pub fn run_config_command(action: ConfigCommands) -> Result<ViewOutcome, CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match action {
        ConfigCommands::Generate { output_path, force } => {
            config_management::config_generate(output_path, force, &mut input, &mut out)
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    cmd: Commands,
    config: &ClientConfig,
) -> Result<ViewOutcome, CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let api = ApiClient::new(&config.api);
    debug!("Dispatching {:?} against {}", cmd, api.base_url());

    let outcome = match cmd {
        Commands::Config { action } => run_config_command(action)?,

        // link 只需要配置，不访问网络
        Commands::Link { short_code } => {
            let redirect = RedirectUrlBuilder::from_config(&config.api);
            print_link(&redirect, &short_code, &mut out)?
        }

        Commands::Create { url } => create_url(&api, &url, &mut out).await?,

        Commands::List { no_retry } => {
            let stdin = io::stdin();
            let interactive = !no_retry && stdin.is_terminal();
            let mut input = stdin.lock();
            let retry_input: Option<&mut dyn BufRead> = if interactive {
                Some(&mut input)
            } else {
                None
            };
            list_urls(&api, &mut out, retry_input).await?
        }

        Commands::Edit {
            short_code,
            new_url,
        } => edit_url(&api, &short_code, &new_url, &mut out).await?,

        Commands::Stats { short_code } => show_stats(&api, &short_code, &mut out).await?,

        Commands::Delete { short_code } => delete_url(&api, &short_code, &mut out).await?,
    };

    out.flush()?;
    Ok(outcome)
}
