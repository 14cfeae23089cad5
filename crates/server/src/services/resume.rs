//! Resume download client.
//!
//! The resume PDF lives on an external file host. Every download re-fetches
//! it so an updated upload shows up immediately; nothing is cached locally.

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::ResumeConfig;

/// Errors that can occur when fetching the resume.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The file host answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Client that proxies the resume document.
#[derive(Clone)]
pub struct ResumeClient {
    client: reqwest::Client,
    url: String,
    content_disposition: HeaderValue,
}

impl ResumeClient {
    /// Create a new resume client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ResumeConfig) -> Result<Self, ResumeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            content_disposition: content_disposition(&config.filename),
        })
    }

    /// Upstream URL of the document.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `Content-Disposition` value forcing a download under the configured filename.
    #[must_use]
    pub const fn content_disposition(&self) -> &HeaderValue {
        &self.content_disposition
    }

    /// Request the document.
    ///
    /// The body is not read; callers stream it from the returned response.
    ///
    /// # Errors
    ///
    /// Returns `ResumeError::Status` for a non-2xx answer and
    /// `ResumeError::Http` if the request fails outright.
    pub async fn fetch(&self) -> Result<reqwest::Response, ResumeError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResumeError::Status(status.as_u16()));
        }

        Ok(response)
    }
}

/// Build an `attachment` disposition, dropping characters that would break the quoted filename.
fn content_disposition(filename: &str) -> HeaderValue {
    let safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| !matches!(c, '"' | '\\' | '/'))
        .collect();
    let safe = safe.trim();
    let safe = if safe.is_empty() { "Resume.pdf" } else { safe };

    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_plain() {
        assert_eq!(
            content_disposition("Jane_Doe_Resume.pdf"),
            "attachment; filename=\"Jane_Doe_Resume.pdf\""
        );
    }

    #[test]
    fn test_content_disposition_strips_quotes_and_paths() {
        assert_eq!(
            content_disposition("../\"evil\".pdf"),
            "attachment; filename=\"..evil.pdf\""
        );
    }

    #[test]
    fn test_content_disposition_falls_back_when_empty() {
        assert_eq!(
            content_disposition("résumé"),
            "attachment; filename=\"rsum\""
        );
        assert_eq!(
            content_disposition("\"\""),
            "attachment; filename=\"Resume.pdf\""
        );
    }
}
