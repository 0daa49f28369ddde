//! Metadata records produced by the extractor.

use serde::{Deserialize, Serialize};

/// Phase used when the page does not declare one.
pub const DEFAULT_PHASE: &str = "Ideation";

/// Tag applied to imported projects that declare no tags of their own.
pub const IMPORTED_TAG: &str = "imported";

/// Description used when the page has neither `og:description` nor `description`.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Description used when the page could not be fetched at all.
pub const SCRAPE_FAILED_DESCRIPTION: &str = "Imported from URL (Metadata scraping failed)";

/// Raw scrape result: what the page actually declared, nothing filled in.
///
/// `None` / empty means the tag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute `og:image` URL
    pub image: Option<String>,
    /// Absolute favicon URL
    pub favicon: Option<String>,
    /// `10k:phase`
    pub phase: Option<String>,
    /// `10k:tags`, split and trimmed
    pub tags: Vec<String>,
    /// `10k:needs`, split and trimmed
    pub needs: Vec<String>,
}

/// Normalized metadata for a project page. Every field has a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub favicon: Option<String>,
    pub phase: String,
    pub tags: Vec<String>,
    pub needs: Vec<String>,
    /// Set only by [`ProjectMetadata::degraded`]
    #[serde(skip)]
    degraded: bool,
}

impl ProjectMetadata {
    /// Apply the fallback chain to a raw scrape of `url`.
    ///
    /// `url` is the caller's input, kept verbatim for the title fallback.
    pub fn from_page(url: &str, page: PageMetadata) -> Self {
        Self {
            title: page.title.unwrap_or_else(|| url.to_string()),
            description: page
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            image_url: page.image,
            favicon: page.favicon,
            phase: page.phase.unwrap_or_else(|| DEFAULT_PHASE.to_string()),
            tags: if page.tags.is_empty() {
                default_tags()
            } else {
                page.tags
            },
            needs: page.needs,
            degraded: false,
        }
    }

    /// Record used when the page could not be fetched.
    pub fn degraded(url: &str) -> Self {
        Self {
            title: url.to_string(),
            description: SCRAPE_FAILED_DESCRIPTION.to_string(),
            image_url: None,
            favicon: None,
            phase: DEFAULT_PHASE.to_string(),
            tags: default_tags(),
            needs: Vec::new(),
            degraded: true,
        }
    }

    /// Whether this record came from [`ProjectMetadata::degraded`].
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

fn default_tags() -> Vec<String> {
    vec![IMPORTED_TAG.to_string()]
}
