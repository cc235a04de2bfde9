//! Stats view: one short URL with its access count

use std::io::Write;

use colored::Colorize;

use crate::client::ShortUrlApi;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::render::render_card;
use crate::interfaces::cli::view::{Notice, ViewOutcome, ViewState};
use crate::models::UrlCard;

pub async fn show_stats<W: Write + ?Sized>(
    api: &dyn ShortUrlApi,
    short_code: &str,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    writeln!(out, "{}", "Loading statistics...".dimmed())?;
    out.flush()?;

    match ViewState::from_result(api.stats(short_code).await) {
        ViewState::Ready(stats) => {
            writeln!(out, "{}", "URL statistics:".bold().green())?;
            writeln!(out)?;
            render_card(
                out,
                UrlCard::from(&stats),
                &api.redirect_url(stats.short_code()),
            )?;
            Ok(ViewOutcome::Completed)
        }
        state => {
            Notice::error(
                "Error loading URL statistics",
                state.error().unwrap_or_default(),
            )
            .render(out)?;
            Ok(ViewOutcome::Failed)
        }
    }
}
