//! In-memory [`ShortUrlApi`] used by view tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::{RedirectUrlBuilder, ShortUrlApi};
use crate::errors::{Result, ShortenerError};
use crate::models::{CreateUrlRequest, ShortUrl, ShortUrlWithStats, UpdateUrlRequest};

/// Counts every network-equivalent call; list failures propagate.
pub(crate) struct MemoryApi {
    urls: Mutex<Vec<ShortUrlWithStats>>,
    calls: AtomicUsize,
    list_failures: AtomicUsize,
    next_id: AtomicUsize,
    redirect: RedirectUrlBuilder,
}

impl MemoryApi {
    pub(crate) fn new() -> Self {
        Self {
            urls: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            list_failures: AtomicUsize::new(0),
            next_id: AtomicUsize::new(1),
            redirect: RedirectUrlBuilder::new("http://sho.rt", "/r/"),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make the next `n` list calls fail with a server error
    pub(crate) fn fail_next_lists(&self, n: usize) {
        self.list_failures.store(n, Ordering::SeqCst);
    }

    /// Seed a record without counting a call
    pub(crate) fn seed(&self, url: &str, access_count: u64) -> ShortUrl {
        let record = self.new_record(url);
        self.urls.lock().push(ShortUrlWithStats {
            record: record.clone(),
            access_count,
        });
        record
    }

    fn new_record(&self, url: &str) -> ShortUrl {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        ShortUrl {
            id: id.to_string(),
            url: url.to_string(),
            short_code: format!("c{}", id),
            created_at: now,
            updated_at: now,
        }
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn find(&self, short_code: &str) -> Result<ShortUrlWithStats> {
        self.urls
            .lock()
            .iter()
            .find(|u| u.record.short_code == short_code)
            .cloned()
            .ok_or_else(|| ShortenerError::not_found("URL not found"))
    }
}

#[async_trait]
impl ShortUrlApi for MemoryApi {
    async fn create(&self, request: CreateUrlRequest) -> Result<ShortUrl> {
        self.hit();
        Ok(self.seed(&request.url, 0))
    }

    async fn read(&self, short_code: &str) -> Result<ShortUrl> {
        self.hit();
        self.find(short_code).map(|u| u.record)
    }

    async fn update(&self, short_code: &str, request: UpdateUrlRequest) -> Result<ShortUrl> {
        self.hit();
        let mut urls = self.urls.lock();
        let entry = urls
            .iter_mut()
            .find(|u| u.record.short_code == short_code)
            .ok_or_else(|| ShortenerError::not_found("URL not found"))?;
        entry.record.url = request.url;
        entry.record.updated_at = Utc::now();
        Ok(entry.record.clone())
    }

    async fn delete(&self, short_code: &str) -> Result<()> {
        self.hit();
        let mut urls = self.urls.lock();
        let before = urls.len();
        urls.retain(|u| u.record.short_code != short_code);
        if urls.len() == before {
            return Err(ShortenerError::not_found("URL not found"));
        }
        Ok(())
    }

    async fn stats(&self, short_code: &str) -> Result<ShortUrlWithStats> {
        self.hit();
        self.find(short_code)
    }

    async fn list(&self) -> Result<Vec<ShortUrlWithStats>> {
        self.hit();
        let remaining = self.list_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.list_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ShortenerError::http(500, "database unavailable"));
        }
        Ok(self.urls.lock().clone())
    }

    fn redirect_url(&self, short_code: &str) -> String {
        self.redirect.redirect_url(short_code)
    }
}
