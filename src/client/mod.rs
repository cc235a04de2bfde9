//! Client layer for the shortener API
//!
//! Views talk to the API only through [`ShortUrlApi`]. [`ApiClient`] is the
//! HTTP implementation; tests and embedders can supply their own.
//!
//! # Endpoints
//!
//! ```text
//! create  POST   /shorten                   {url} → ShortUrl
//! read    GET    /shorten/{code}                  → ShortUrl
//! update  PUT    /shorten/{code}            {url} → ShortUrl
//! delete  DELETE /shorten/{code}                  → (empty)
//! stats   GET    /shorten/{code}/stats            → ShortUrlWithStats
//! list    GET    /shorten                         → [ShortUrlWithStats]
//! ```
//!
//! # List failure policy
//!
//! - `ListFailurePolicy::EmptyOnError` (default) → failure logged, empty list returned
//! - `ListFailurePolicy::Propagate` → failure returned to the caller

mod api_client;
#[cfg(test)]
pub(crate) mod memory;
mod redirect;

pub use api_client::ApiClient;
pub use redirect::RedirectUrlBuilder;

pub use crate::config::ListFailurePolicy;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{CreateUrlRequest, ShortUrl, ShortUrlWithStats, UpdateUrlRequest};

/// Operations offered by the shortener API.
///
/// Every method except [`redirect_url`](ShortUrlApi::redirect_url) is one
/// network round trip. `short_code` is the stable key for a resource.
#[async_trait]
pub trait ShortUrlApi: Send + Sync {
    /// Shorten a URL; the server assigns id, short code and timestamps.
    async fn create(&self, request: CreateUrlRequest) -> Result<ShortUrl>;

    async fn read(&self, short_code: &str) -> Result<ShortUrl>;

    /// Replace the destination; returns the server's updated copy.
    async fn update(&self, short_code: &str, request: UpdateUrlRequest) -> Result<ShortUrl>;

    async fn delete(&self, short_code: &str) -> Result<()>;

    async fn stats(&self, short_code: &str) -> Result<ShortUrlWithStats>;

    /// All short URLs in server order. Failure handling follows the
    /// implementation's [`ListFailurePolicy`].
    async fn list(&self) -> Result<Vec<ShortUrlWithStats>>;

    /// Public redirect address for a code. Pure, no I/O.
    fn redirect_url(&self, short_code: &str) -> String;
}
