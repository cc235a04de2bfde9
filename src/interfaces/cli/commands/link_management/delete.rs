//! Delete a short URL

use std::io::Write;

use colored::Colorize;

use crate::client::ShortUrlApi;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::view::{Notice, ViewOutcome, ViewState};

pub async fn delete_url<W: Write + ?Sized>(
    api: &dyn ShortUrlApi,
    short_code: &str,
    out: &mut W,
) -> Result<ViewOutcome, CliError> {
    writeln!(out, "{}", "Deleting...".dimmed())?;
    out.flush()?;

    match ViewState::from_result(api.delete(short_code).await) {
        ViewState::Ready(()) => {
            Notice::success("URL deleted successfully").render(out)?;
            Ok(ViewOutcome::Completed)
        }
        state => {
            Notice::error("Error deleting URL", state.error().unwrap_or_default()).render(out)?;
            Ok(ViewOutcome::Failed)
        }
    }
}
