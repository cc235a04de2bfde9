//! 表单输入验证
//!
//! Destination URLs are arbitrary strings: the only client-side rule is that
//! they are not blank. Everything else is the server's call.

use crate::errors::ShortenerError;

/// 表单验证错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    EmptyShortCode,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL is required"),
            Self::EmptyShortCode => write!(f, "Short code is required"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

impl From<UrlValidationError> for ShortenerError {
    fn from(err: UrlValidationError) -> Self {
        ShortenerError::validation(err.to_string())
    }
}

/// Check a destination URL entered in the create/edit form.
///
/// Blank and whitespace-only input is rejected; the value itself is sent
/// unchanged.
pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    if url.trim().is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }
    Ok(())
}

/// Check a short code before it is used to address a resource
pub fn validate_short_code(short_code: &str) -> Result<(), UrlValidationError> {
    if short_code.trim().is_empty() {
        return Err(UrlValidationError::EmptyShortCode);
    }
    Ok(())
}
