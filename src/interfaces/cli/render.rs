//! Card rendering for short URLs

use std::io::Write;

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::models::UrlCard;

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render one card: code and redirect link, destination, click count when the
/// record carries statistics, then timestamps.
pub fn render_card<W: Write + ?Sized>(
    out: &mut W,
    card: UrlCard<'_>,
    redirect_url: &str,
) -> std::io::Result<()> {
    let record = card.record();

    writeln!(
        out,
        "  {} {}",
        record.short_code.cyan().bold(),
        redirect_url.blue().underline()
    )?;
    writeln!(out, "    Original: {}", record.url)?;
    if let Some(count) = card.access_count() {
        writeln!(out, "    {}", format!("Clicks: {}", count).cyan())?;
    }
    writeln!(
        out,
        "    {}",
        format!(
            "Created: {}  Last updated: {}",
            format_timestamp(&record.created_at),
            format_timestamp(&record.updated_at)
        )
        .dimmed()
    )
}
