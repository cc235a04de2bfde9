//! Create view: shorten a URL

use std::io::Write;

use colored::Colorize;

use crate::client::ShortUrlApi;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::render::render_card;
use crate::interfaces::cli::view::{Notice, ViewOutcome, ViewState};
use crate::models::{CreateUrlRequest, UrlCard};
use crate::utils::url_validator::validate_url;

pub async fn create_url<W: Write + ?Sized>(
    api: &dyn ShortUrlApi,
    target_url: &str,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    if let Err(e) = validate_url(target_url) {
        Notice::error("Invalid input", e.to_string()).render(out)?;
        return Ok(ViewOutcome::Failed);
    }

    writeln!(out, "{}", "Shortening...".dimmed())?;
    out.flush()?;

    match ViewState::from_result(api.create(CreateUrlRequest::new(target_url)).await) {
        ViewState::Ready(url) => {
            Notice::success("URL shortened successfully").render(out)?;
            writeln!(out)?;
            render_card(out, UrlCard::from(&url), &api.redirect_url(&url.short_code))?;
            Ok(ViewOutcome::Completed)
        }
        state => {
            Notice::error("Error shortening URL", state.error().unwrap_or_default()).render(out)?;
            Ok(ViewOutcome::Failed)
        }
    }
}
