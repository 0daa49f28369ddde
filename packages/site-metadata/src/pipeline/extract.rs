//! The metadata extractor: fetch, parse, apply fallbacks.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::error::FetchResult;
use crate::fetchers::HttpFetcher;
use crate::pipeline::document::PageDocument;
use crate::pipeline::normalize::{resolve_against_origin, split_list};
use crate::traits::fetcher::{FetchedPage, PageFetcher};
use crate::types::metadata::{PageMetadata, ProjectMetadata};

/// Custom meta keys a project page can use to describe itself.
pub mod keys {
    pub const OG_TITLE: &str = "og:title";
    pub const OG_DESCRIPTION: &str = "og:description";
    pub const OG_IMAGE: &str = "og:image";
    pub const DESCRIPTION: &str = "description";
    pub const PHASE: &str = "10k:phase";
    pub const TAGS: &str = "10k:tags";
    pub const NEEDS: &str = "10k:needs";
}

/// Turns a URL into [`ProjectMetadata`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use site_metadata::{MetadataExtractor, MockFetcher};
///
/// # tokio_test::block_on(async {
/// let fetcher = MockFetcher::new()
///     .with_page("https://example.com", r#"<meta property="og:title" content="Example">"#);
/// let extractor = MetadataExtractor::new(Arc::new(fetcher));
///
/// let meta = extractor.extract("https://example.com").await;
/// assert_eq!(meta.title, "Example");
/// # });
/// ```
#[derive(Clone)]
pub struct MetadataExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl MetadataExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Extractor backed by a default [`HttpFetcher`].
    pub fn with_http() -> Self {
        Self::new(Arc::new(HttpFetcher::new()))
    }

    pub fn fetcher_name(&self) -> &str {
        self.fetcher.name()
    }

    /// Fetch `url` and report what the page declares, with no fallbacks applied.
    pub async fn scrape(&self, url: &Url) -> FetchResult<PageMetadata> {
        let page = self.fetcher.fetch(url).await?;
        let metadata = parse_page(&page);

        debug!(
            url = %url,
            final_url = %page.final_url,
            has_title = metadata.title.is_some(),
            has_image = metadata.image.is_some(),
            has_favicon = metadata.favicon.is_some(),
            "Scraped page metadata"
        );

        Ok(metadata)
    }

    /// Best-effort extraction. Never fails.
    ///
    /// Unparseable URLs and fetch failures produce
    /// [`ProjectMetadata::degraded`]; the original `url` string is the title.
    pub async fn extract(&self, url: &str) -> ProjectMetadata {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(url = %url, error = %e, "Cannot parse URL, using degraded metadata");
                return ProjectMetadata::degraded(url);
            }
        };

        match self.scrape(&parsed).await {
            Ok(page) => {
                let metadata = ProjectMetadata::from_page(url, page);
                info!(url = %url, title = %metadata.title, "Extracted project metadata");
                metadata
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Metadata scrape failed, using degraded metadata");
                ProjectMetadata::degraded(url)
            }
        }
    }
}

impl std::fmt::Debug for MetadataExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataExtractor")
            .field("fetcher", &self.fetcher.name())
            .finish()
    }
}

/// Read the declared metadata out of a fetched page.
///
/// Relative image and favicon references resolve against the origin of the
/// final (post-redirect) URL.
pub fn parse_page(page: &FetchedPage) -> PageMetadata {
    let doc = PageDocument::parse(&page.html);

    let title = doc.meta_content(keys::OG_TITLE).or_else(|| doc.title());
    let description = doc
        .meta_content(keys::OG_DESCRIPTION)
        .or_else(|| doc.meta_content(keys::DESCRIPTION));
    let image = doc
        .meta_content(keys::OG_IMAGE)
        .and_then(|href| resolve_against_origin(&href, &page.final_url));
    let favicon = doc
        .icon_href()
        .and_then(|href| resolve_against_origin(&href, &page.final_url));
    let phase = doc.meta_content(keys::PHASE);

    PageMetadata {
        title,
        description,
        image,
        favicon,
        phase,
        tags: doc
            .meta_content(keys::TAGS)
            .map(|raw| split_list(&raw))
            .unwrap_or_default(),
        needs: doc
            .meta_content(keys::NEEDS)
            .map(|raw| split_list(&raw))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, html: &str) -> FetchedPage {
        FetchedPage::new(Url::parse(url).unwrap(), html)
    }

    #[test]
    fn test_parse_page_prefers_open_graph() {
        let html = r#"<html><head>
            <title>Fallback Title</title>
            <meta name="description" content="Plain description">
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG description">
        </head></html>"#;

        let meta = parse_page(&page("https://example.com", html));

        assert_eq!(meta.title.as_deref(), Some("OG Title"));
        assert_eq!(meta.description.as_deref(), Some("OG description"));
    }

    #[test]
    fn test_parse_page_falls_back_to_plain_tags() {
        let html = r#"<title> Plain </title><meta name="description" content="Plain description">"#;

        let meta = parse_page(&page("https://example.com", html));

        assert_eq!(meta.title.as_deref(), Some("Plain"));
        assert_eq!(meta.description.as_deref(), Some("Plain description"));
    }

    #[test]
    fn test_parse_page_resolves_against_final_origin() {
        let fetched = page(
            "https://short.example/abc",
            r#"<link rel="icon" href="favicon.ico"><meta property="og:image" content="/og.png">"#,
        )
        .with_final_url(Url::parse("https://app.example.com/landing/page").unwrap());

        let meta = parse_page(&fetched);

        assert_eq!(meta.favicon.as_deref(), Some("https://app.example.com/favicon.ico"));
        assert_eq!(meta.image.as_deref(), Some("https://app.example.com/og.png"));
    }

    #[test]
    fn test_parse_page_custom_keys() {
        let html = r#"
            <meta name="10k:phase" content="MVP">
            <meta name="10k:tags" content="AI, SaaS, ,Mobile">
            <meta property="10k:needs" content="Designer,Backend dev">
        "#;

        let meta = parse_page(&page("https://example.com", html));

        assert_eq!(meta.phase.as_deref(), Some("MVP"));
        assert_eq!(meta.tags, vec!["AI", "SaaS", "Mobile"]);
        assert_eq!(meta.needs, vec!["Designer", "Backend dev"]);
    }

    #[test]
    fn test_parse_empty_page() {
        let meta = parse_page(&page("https://example.com", ""));
        assert_eq!(meta, PageMetadata::default());
    }
}
