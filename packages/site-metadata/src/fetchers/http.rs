//! HTTP-based fetcher implementation.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchFailure, FetchResult};
use crate::traits::fetcher::{FetchedPage, PageFetcher};

/// User agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; 10000IdeasBot/1.0;)";

/// Fetcher that performs a single HTTP GET per page.
///
/// No timeout is configured unless [`HttpFetcher::with_timeout`] is used; the
/// request then lives as long as the client allows. The timeout is applied
/// per request, so it also holds for a client set with
/// [`HttpFetcher::with_client`], in either order.
///
/// # Example
///
/// ```rust,ignore
/// use site_metadata::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new().with_user_agent("MyBot/1.0");
/// let page = fetcher.fetch(&url).await?;
/// ```
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default client and bot user agent.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Bound each request, from connect to the end of the body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The user agent this fetcher identifies itself with.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn describe(error: &reqwest::Error) -> &'static str {
        if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else if error.is_body() || error.is_decode() {
            "failed to read response body"
        } else {
            "request failed"
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");

        let mut request = self.client.get(url.clone()).header(USER_AGENT, &self.user_agent);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchFailure::with_source(url.as_str(), Self::describe(&e), e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP fetch returned non-success status");
            return Err(FetchFailure::new(url.as_str(), format!("HTTP {}", status)));
        }

        // Capture final URL after redirects
        let final_url = response.url().clone();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            FetchFailure::with_source(url.as_str(), Self::describe(&e), e)
        })?;

        debug!(url = %url, final_url = %final_url, bytes = html.len(), "HTTP fetch completed");

        let mut page = FetchedPage::new(url.clone(), html)
            .with_final_url(final_url)
            .with_fetched_at(Utc::now());
        if let Some(ct) = content_type {
            page = page.with_content_type(ct);
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, response::Html, routing::get, Router};

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    #[test]
    fn test_default_user_agent() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.user_agent(), DEFAULT_USER_AGENT);
        assert!(fetcher.user_agent().starts_with("Mozilla/5.0 (compatible; "));
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent_and_returns_body() {
        let router = Router::new().route(
            "/",
            get(|headers: HeaderMap| async move {
                let ua = headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Html(format!("<title>{}</title>", ua))
            }),
        );
        let base = serve(router).await;

        let page = HttpFetcher::new().fetch(&base).await.unwrap();

        assert_eq!(page.url, base);
        assert!(page.html.contains(DEFAULT_USER_AGENT));
        assert!(page
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let router = Router::new().route("/", get(|| async { (StatusCode::NOT_FOUND, "gone") }));
        let base = serve(router).await;

        let err = HttpFetcher::new().fetch(&base).await.unwrap_err();

        assert_eq!(err.url, base.as_str());
        assert!(err.reason.contains("404"));
    }

    #[test]
    fn test_timeout_survives_custom_client() {
        let fetcher = HttpFetcher::new()
            .with_timeout(Duration::from_secs(3))
            .with_client(reqwest::Client::new());

        assert_eq!(fetcher.timeout(), Some(Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out_with_custom_client() {
        let router = Router::new().route(
            "/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let base = serve(router).await;

        let err = HttpFetcher::new()
            .with_timeout(Duration::from_millis(100))
            .with_client(reqwest::Client::new())
            .fetch(&base)
            .await
            .unwrap_err();

        assert_eq!(err.reason, "request timed out");
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{}/", addr)).unwrap();

        let result = HttpFetcher::new().fetch(&url).await;

        assert!(result.is_err());
    }
}
