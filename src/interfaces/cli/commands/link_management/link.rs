//! Print the redirect URL for a short code

use std::io::Write;

use crate::client::RedirectUrlBuilder;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::view::{Notice, ViewOutcome};
use crate::utils::url_validator::validate_short_code;

/// No network: the address is derived from configuration alone.
pub fn print_link<W: Write + ?Sized>(
    redirect: &RedirectUrlBuilder,
    short_code: &str,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    if let Err(e) = validate_short_code(short_code) {
        Notice::error("Invalid input", e.to_string()).render(out)?;
        return Ok(ViewOutcome::Failed);
    }

    writeln!(out, "{}", redirect.redirect_url(short_code))?;
    Ok(ViewOutcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_plain_link() {
        let redirect = RedirectUrlBuilder::new("https://sho.rt/", "r");
        let mut out = Vec::new();

        let outcome = print_link(&redirect, "abc123", &mut out).unwrap();

        assert_eq!(outcome, ViewOutcome::Completed);
        assert_eq!(String::from_utf8(out).unwrap(), "https://sho.rt/r/abc123\n");
    }

    #[test]
    fn test_empty_code_is_rejected() {
        colored::control::set_override(false);
        let redirect = RedirectUrlBuilder::new("https://sho.rt", "/r/");
        let mut out = Vec::new();

        let outcome = print_link(&redirect, "", &mut out).unwrap();

        assert_eq!(outcome, ViewOutcome::Failed);
        assert!(String::from_utf8(out).unwrap().contains("Short code is required"));
    }
}
