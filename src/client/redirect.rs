//! Public redirect address derivation

use crate::config::ApiConfig;

/// Builds `base + prefix + code` redirect addresses.
///
/// The base and prefix are joined once up front, so each call is a plain
/// concatenation with no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrlBuilder {
    root: String,
}

impl RedirectUrlBuilder {
    /// `base_url` may end with `/`; `redirect_prefix` may omit either slash.
    pub fn new(base_url: &str, redirect_prefix: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let segment = redirect_prefix.trim_matches('/');
        Self {
            root: format!("{}/{}/", base, segment),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(&api.base_url, &api.redirect_prefix)
    }

    /// Everything before the short code, e.g. `http://localhost:8080/r/`
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn redirect_url(&self, short_code: &str) -> String {
        let mut url = String::with_capacity(self.root.len() + short_code.len());
        url.push_str(&self.root);
        url.push_str(short_code);
        url
    }
}
