//! Generate config command

use std::io::{BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::{ClientConfig, DEFAULT_CONFIG_PATH};
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::view::ViewOutcome;

/// Write the default configuration as TOML.
///
/// An existing file is only replaced with `force` or after a `y` answer on
/// `input`.
pub fn config_generate<W: Write + ?Sized>(
    output_path: Option<String>,
    force: bool,
    input: &mut dyn BufRead,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    // 文件已存在时，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        write!(
            out,
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        )?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "{}", "Aborted.".red())?;
            return Ok(ViewOutcome::Failed);
        }
    }

    writeln!(
        out,
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    )?;

    ClientConfig::default()
        .save_to_file(&path)
        .map_err(|e| CliError::CommandError(format!("Unable to write configuration file: {}", e)))?;

    writeln!(
        out,
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    )?;
    writeln!(
        out,
        "  {}",
        "Edit api.base_url to point at your shortener service".dimmed()
    )?;
    Ok(ViewOutcome::Completed)
}
