//! Wire types exchanged with the shortener API
//!
//! Field names are camelCase on the wire (`shortCode`, `createdAt`,
//! `accessCount`) and snake_case in Rust.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened link as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrl {
    pub id: String,
    /// Original (long) destination URL
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A shortened link together with its server-side access counter.
///
/// Flat on the wire: the `ShortUrl` fields and `accessCount` share one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlWithStats {
    #[serde(flatten)]
    pub record: ShortUrl,
    pub access_count: u64,
}

impl ShortUrlWithStats {
    pub fn short_code(&self) -> &str {
        &self.record.short_code
    }
}

impl AsRef<ShortUrl> for ShortUrlWithStats {
    fn as_ref(&self) -> &ShortUrl {
        &self.record
    }
}

/// Body of `POST /shorten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

/// Body of `PUT /shorten/{shortCode}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUrlRequest {
    pub url: String,
}

impl CreateUrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl UpdateUrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// A record handed to a card renderer.
///
/// Whether the card can show an access count is decided by the variant.
#[derive(Debug, Clone, Copy)]
pub enum UrlCard<'a> {
    Plain(&'a ShortUrl),
    WithStats(&'a ShortUrlWithStats),
}

impl<'a> UrlCard<'a> {
    pub fn record(&self) -> &'a ShortUrl {
        match self {
            UrlCard::Plain(url) => url,
            UrlCard::WithStats(stats) => &stats.record,
        }
    }

    pub fn access_count(&self) -> Option<u64> {
        match self {
            UrlCard::Plain(_) => None,
            UrlCard::WithStats(stats) => Some(stats.access_count),
        }
    }
}

impl<'a> From<&'a ShortUrl> for UrlCard<'a> {
    fn from(url: &'a ShortUrl) -> Self {
        UrlCard::Plain(url)
    }
}

impl<'a> From<&'a ShortUrlWithStats> for UrlCard<'a> {
    fn from(stats: &'a ShortUrlWithStats) -> Self {
        UrlCard::WithStats(stats)
    }
}
