//! View state and notices shared by all CLI views
//!
//! Every view moves through `Loading → Ready | Failed`. Notices are the
//! terminal counterpart of toast messages.

use std::io::Write;

use colored::Colorize;

use crate::errors::ShortenerError;

/// Per-view request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T, ShortenerError>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => ViewState::Failed(e.format_simple()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// How a view run ended; drives the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// A transient message shown after a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: None,
        }
    }

    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let (symbol, title) = match self.level {
            NoticeLevel::Success => ("✓".bold().green(), self.title.green()),
            NoticeLevel::Error => ("✗".bold().red(), self.title.red().bold()),
            NoticeLevel::Info => ("ℹ".bold().blue(), self.title.normal()),
        };
        match &self.description {
            Some(description) => writeln!(out, "{} {}: {}", symbol, title, description),
            None => writeln!(out, "{} {}", symbol, title),
        }
    }
}
