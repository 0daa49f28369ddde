//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the PageFetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::error::{FetchFailure, FetchResult};
use crate::traits::fetcher::{FetchedPage, PageFetcher};

#[derive(Clone)]
enum CannedResponse {
    Page { html: String, final_url: Option<Url> },
    Failure(String),
}

/// Mock fetcher for testing.
///
/// URLs without a canned response behave like unreachable hosts.
///
/// # Example
///
/// ```rust
/// use site_metadata::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("https://example.com/", r#"<meta property="og:title" content="Example">"#)
///     .with_failure("https://down.example.com/", "HTTP 503 Service Unavailable");
///
/// assert_eq!(mock.fetch_call_count(), 0);
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned responses indexed by URL
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    /// Track calls for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(url: &str) -> String {
        // Normalize through Url so "https://example.com" and "https://example.com/" match
        Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string())
    }

    /// Serve `html` for `url`.
    pub fn add_page(&self, url: &str, html: impl Into<String>) {
        self.responses.write().unwrap().insert(
            Self::key(url),
            CannedResponse::Page {
                html: html.into(),
                final_url: None,
            },
        );
    }

    /// Serve `html` for `url` as if the request had been redirected to `final_url`.
    pub fn add_redirected_page(&self, url: &str, final_url: &str, html: impl Into<String>) {
        self.responses.write().unwrap().insert(
            Self::key(url),
            CannedResponse::Page {
                html: html.into(),
                final_url: Url::parse(final_url).ok(),
            },
        );
    }

    /// Make `url` fail with the given reason.
    pub fn add_failure(&self, url: &str, reason: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(Self::key(url), CannedResponse::Failure(reason.into()));
    }

    /// Builder form of [`MockFetcher::add_page`].
    pub fn with_page(self, url: &str, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Builder form of [`MockFetcher::add_redirected_page`].
    pub fn with_redirected_page(self, url: &str, final_url: &str, html: impl Into<String>) -> Self {
        self.add_redirected_page(url, final_url, html);
        self
    }

    /// Builder form of [`MockFetcher::add_failure`].
    pub fn with_failure(self, url: &str, reason: impl Into<String>) -> Self {
        self.add_failure(url, reason);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.fetch_calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let canned = self.responses.read().unwrap().get(url.as_str()).cloned();
        match canned {
            Some(CannedResponse::Page { html, final_url }) => {
                let page = FetchedPage::new(url.clone(), html).with_content_type("text/html");
                Ok(match final_url {
                    Some(final_url) => page.with_final_url(final_url),
                    None => page,
                })
            }
            Some(CannedResponse::Failure(reason)) => Err(FetchFailure::new(url.as_str(), reason)),
            None => Err(FetchFailure::new(url.as_str(), "connection failed")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_canned_page() {
        let mock = MockFetcher::new().with_page("https://example.com", "<title>Hi</title>");

        let page = mock
            .fetch(&Url::parse("https://example.com/").unwrap())
            .await
            .unwrap();

        assert_eq!(page.html, "<title>Hi</title>");
        assert_eq!(page.final_url.as_str(), "https://example.com/");
    }

    #[tokio::test]
    async fn test_mock_failure_and_unknown_url() {
        let mock = MockFetcher::new().with_failure("https://down.example.com/", "HTTP 503");

        let err = mock
            .fetch(&Url::parse("https://down.example.com/").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.reason, "HTTP 503");

        let err = mock
            .fetch(&Url::parse("https://unknown.example.com/").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.url, "https://unknown.example.com/");
    }

    #[tokio::test]
    async fn test_mock_call_tracking_shared_between_clones() {
        let mock = MockFetcher::new().with_page("https://example.com/", "");
        let clone = mock.clone();

        clone
            .fetch(&Url::parse("https://example.com/").unwrap())
            .await
            .unwrap();
        let _ = clone
            .fetch(&Url::parse("https://other.example.com/").unwrap())
            .await;

        assert_eq!(mock.fetch_call_count(), 2);
        assert_eq!(
            mock.fetch_calls(),
            vec![
                "https://example.com/".to_string(),
                "https://other.example.com/".to_string(),
            ]
        );

        mock.reset_calls();
        assert_eq!(clone.fetch_call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_redirect() {
        let mock = MockFetcher::new().with_redirected_page(
            "http://example.com/",
            "https://www.example.com/home",
            "",
        );

        let page = mock
            .fetch(&Url::parse("http://example.com/").unwrap())
            .await
            .unwrap();

        assert_eq!(page.origin(), "https://www.example.com");
    }
}
