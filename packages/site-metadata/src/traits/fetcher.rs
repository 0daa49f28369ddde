//! Fetcher trait for pluggable page retrieval.
//!
//! The extractor never talks to the network directly. It asks a
//! [`PageFetcher`] for the raw markup of exactly one URL, which keeps the
//! parsing rules testable without sockets.
//!
//! ```rust,ignore
//! use site_metadata::{HttpFetcher, PageFetcher};
//!
//! let fetcher = HttpFetcher::new();
//! let page = fetcher.fetch(&"https://example.com".parse()?).await?;
//! println!("{} bytes", page.html.len());
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchResult;

/// Raw markup returned by a fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: Url,

    /// URL after redirects (equal to `url` when there were none)
    pub final_url: Url,

    /// Response body as text
    pub html: String,

    /// Content-Type header, if the server sent one
    pub content_type: Option<String>,

    /// When the body was read
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page that was served without redirects.
    pub fn new(url: Url, html: impl Into<String>) -> Self {
        Self {
            final_url: url.clone(),
            url,
            html: html.into(),
            content_type: None,
            fetched_at: Utc::now(),
        }
    }

    /// Record the post-redirect URL.
    pub fn with_final_url(mut self, final_url: Url) -> Self {
        self.final_url = final_url;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the fetched timestamp.
    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = fetched_at;
        self
    }

    /// Origin of the page that was actually served, e.g. `https://example.com`.
    pub fn origin(&self) -> String {
        self.final_url.origin().ascii_serialization()
    }
}

/// Retrieves the markup of a single page.
///
/// Implementations:
/// - `HttpFetcher` - reqwest-backed GET with the scraper user agent
/// - `MockFetcher` - canned pages and failures for tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Perform exactly one GET for `url`.
    ///
    /// Any transport problem (DNS, timeout, non-2xx, unreadable body) is a
    /// [`crate::FetchFailure`].
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
