use std::process::ExitCode;

use clap::Parser;

use shorten_client::cli::Cli;
use shorten_client::runtime::modes::run_cli;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    run_cli(Cli::parse())
}
