//! Edit view: change the destination of an existing short URL

use std::io::Write;

use colored::Colorize;

use crate::client::ShortUrlApi;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::render::render_card;
use crate::interfaces::cli::view::{Notice, ViewOutcome, ViewState};
use crate::models::{UpdateUrlRequest, UrlCard};
use crate::utils::url_validator::validate_url;

/// A blank new URL is rejected before any request. Otherwise the record is
/// loaded first and the update only sent once that load succeeded.
pub async fn edit_url<W: Write + ?Sized>(
    api: &dyn ShortUrlApi,
    short_code: &str,
    new_url: &str,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    if let Err(e) = validate_url(new_url) {
        Notice::error("Invalid input", e.to_string()).render(out)?;
        return Ok(ViewOutcome::Failed);
    }

    writeln!(out, "{}", "Loading URL...".dimmed())?;
    out.flush()?;

    let current = match ViewState::from_result(api.read(short_code).await) {
        ViewState::Ready(url) => url,
        state => {
            Notice::error("Error loading URL", state.error().unwrap_or_default()).render(out)?;
            return Ok(ViewOutcome::Failed);
        }
    };

    writeln!(
        out,
        "{} Current destination: {}",
        "ℹ".bold().blue(),
        current.url.blue().underline()
    )?;

    writeln!(out, "{}", "Updating...".dimmed())?;
    out.flush()?;

    match ViewState::from_result(
        api.update(&current.short_code, UpdateUrlRequest::new(new_url))
            .await,
    ) {
        ViewState::Ready(updated) => {
            Notice::success("URL updated successfully").render(out)?;
            writeln!(out)?;
            render_card(
                out,
                UrlCard::from(&updated),
                &api.redirect_url(&updated.short_code),
            )?;
            Ok(ViewOutcome::Completed)
        }
        state => {
            Notice::error("Error updating URL", state.error().unwrap_or_default()).render(out)?;
            Ok(ViewOutcome::Failed)
        }
    }
}
