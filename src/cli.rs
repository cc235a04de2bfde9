//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shorten using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;

/// shorten - terminal client for a URL shortener service
#[derive(Parser, Debug)]
#[command(name = "shorten")]
#[command(version)]
#[command(about = "Create, inspect and manage short URLs", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Shortener API base address, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path prefix of public redirect links (default: /r/)
    #[arg(long, global = true)]
    pub redirect_prefix: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            redirect_prefix: self.redirect_prefix.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Shorten a URL
    Create {
        /// Destination URL
        url: String,
    },

    /// List all short URLs with their click counts
    List {
        /// Do not offer a retry prompt when loading fails
        #[arg(long)]
        no_retry: bool,
    },

    /// Change the destination of a short URL
    Edit {
        /// Short code to edit
        short_code: String,

        /// New destination URL
        new_url: String,
    },

    /// Show click statistics for a short URL
    Stats {
        short_code: String,
    },

    /// Delete a short URL
    Delete {
        short_code: String,
    },

    /// Print the public redirect URL for a short code
    Link {
        short_code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate a sample configuration file
    Generate {
        /// Output path (default: config.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
