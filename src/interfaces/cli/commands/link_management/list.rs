//! List view: every short URL with its click count

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::client::ShortUrlApi;
use crate::interfaces::cli::CliError;
use crate::interfaces::cli::render::render_card;
use crate::interfaces::cli::view::{Notice, ViewOutcome, ViewState};
use crate::models::{ShortUrlWithStats, UrlCard};

/// The only view with a retry transition (`Failed → Loading`).
pub struct ListView<'a> {
    api: &'a dyn ShortUrlApi,
    state: ViewState<Vec<ShortUrlWithStats>>,
    attempts: usize,
}

impl<'a> ListView<'a> {
    pub fn new(api: &'a dyn ShortUrlApi) -> Self {
        Self {
            api,
            state: ViewState::Loading,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<ShortUrlWithStats>> {
        &self.state
    }

    /// Number of list requests issued so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub async fn load(&mut self) -> &ViewState<Vec<ShortUrlWithStats>> {
        self.state = ViewState::Loading;
        self.attempts += 1;
        self.state = ViewState::from_result(self.api.list().await);
        &self.state
    }

    /// Reload after a failure. Does nothing unless the view is in `Failed`.
    pub async fn retry(&mut self) -> bool {
        if !self.state.is_failed() {
            return false;
        }
        self.load().await;
        true
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        match &self.state {
            ViewState::Loading => writeln!(out, "{}", "Loading URLs...".dimmed()),
            ViewState::Failed(message) => {
                Notice::error("Error loading URLs", message.as_str()).render(out)
            }
            ViewState::Ready(urls) if urls.is_empty() => {
                Notice::info("No short URLs yet. Create one with `shorten create <URL>`")
                    .render(out)
            }
            ViewState::Ready(urls) => {
                writeln!(out, "{}", "Your short URLs:".bold().green())?;
                writeln!(out)?;
                for url in urls {
                    render_card(
                        out,
                        UrlCard::from(url),
                        &self.api.redirect_url(url.short_code()),
                    )?;
                }
                writeln!(out)?;
                writeln!(
                    out,
                    "{} Total {} short URLs",
                    "ℹ".bold().blue(),
                    urls.len().to_string().green()
                )
            }
        }
    }
}

/// Load and render the list. With `retry_input`, a failure prompts for a
/// manual retry; each `y` answer reloads.
pub async fn list_urls<W: Write + ?Sized>(
    api: &dyn ShortUrlApi,
    out: &mut W,
    mut retry_input: Option<&mut dyn BufRead>,
) -> Result<ViewOutcome, CliError> {
    let mut view = ListView::new(api);
    view.render(out)?;
    out.flush()?;
    view.load().await;

    loop {
        view.render(out)?;

        if !view.state().is_failed() {
            return Ok(ViewOutcome::Completed);
        }

        let Some(input) = retry_input.as_deref_mut() else {
            return Ok(ViewOutcome::Failed);
        };

        write!(out, "{} ", "Retry? [y/N]".yellow())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(ViewOutcome::Failed);
        }

        writeln!(out, "{}", "Loading URLs...".dimmed())?;
        out.flush()?;
        view.retry().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::MemoryApi;
    use std::io::Cursor;

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_empty_state() {
        colored::control::set_override(false);
        let api = MemoryApi::new();
        let mut out = Vec::new();

        let outcome = list_urls(&api, &mut out, None).await.unwrap();

        assert_eq!(outcome, ViewOutcome::Completed);
        assert!(text(out).contains("No short URLs yet"));
    }

    #[tokio::test]
    async fn test_lists_cards_in_server_order() {
        colored::control::set_override(false);
        let api = MemoryApi::new();
        api.seed("https://first.example", 3);
        api.seed("https://second.example", 0);
        let mut out = Vec::new();

        list_urls(&api, &mut out, None).await.unwrap();

        let text = text(out);
        let first = text.find("https://first.example").unwrap();
        let second = text.find("https://second.example").unwrap();
        assert!(first < second);
        assert!(text.contains("Clicks: 3"));
        assert!(text.contains("Total 2 short URLs"));
    }

    #[tokio::test]
    async fn test_view_starts_loading_and_retry_needs_failure() {
        let api = MemoryApi::new();
        let mut view = ListView::new(&api);
        assert!(view.state().is_loading());

        view.load().await;
        assert_eq!(view.state().ready().map(Vec::len), Some(0));
        assert!(!view.retry().await);
        assert_eq!(view.attempts(), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_after_failure() {
        colored::control::set_override(false);
        let api = MemoryApi::new();
        api.seed("https://example.com", 1);
        api.fail_next_lists(1);

        let mut input = Cursor::new(b"y\n".to_vec());
        let mut out = Vec::new();
        let outcome = list_urls(&api, &mut out, Some(&mut input)).await.unwrap();

        assert_eq!(outcome, ViewOutcome::Completed);
        assert_eq!(api.calls(), 2);
        let text = text(out);
        assert!(text.contains("Error loading URLs"));
        assert!(text.contains("Retry? [y/N]"));
        assert!(text.contains("https://example.com"));
    }

    #[tokio::test]
    async fn test_declined_retry_fails() {
        colored::control::set_override(false);
        let api = MemoryApi::new();
        api.fail_next_lists(5);

        let mut input = Cursor::new(b"n\n".to_vec());
        let mut out = Vec::new();
        let outcome = list_urls(&api, &mut out, Some(&mut input)).await.unwrap();

        assert_eq!(outcome, ViewOutcome::Failed);
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_non_interactive_failure_does_not_prompt() {
        colored::control::set_override(false);
        let api = MemoryApi::new();
        api.fail_next_lists(1);
        let mut out = Vec::new();

        let outcome = list_urls(&api, &mut out, None).await.unwrap();

        assert_eq!(outcome, ViewOutcome::Failed);
        let text = text(out);
        assert!(text.contains("Server Error (500): database unavailable"));
        assert!(!text.contains("Retry?"));
    }
}
