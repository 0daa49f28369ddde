//! # Site Metadata
//!
//! Best-effort metadata extraction for project pages.
//!
//! Given a URL, fetch the page and read its Open Graph tags, `<title>`,
//! `description`, favicon link and the `10k:*` self-description tags
//! (`10k:phase`, `10k:tags`, `10k:needs`). Missing values fall back to
//! defaults, and a page that cannot be fetched yields a degraded record
//! instead of an error.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use site_metadata::MetadataExtractor;
//!
//! let extractor = MetadataExtractor::with_http();
//! let meta = extractor.extract("https://example.com").await;
//! println!("{} ({})", meta.title, meta.phase);
//! ```
//!
//! ## Modules
//!
//! - [`traits`] - the `PageFetcher` seam
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`pipeline`] - DOM queries, normalization and the extractor
//! - [`types`] - `PageMetadata` and `ProjectMetadata`

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod traits;
pub mod types;

pub use error::{FetchFailure, FetchResult};
pub use fetchers::{HttpFetcher, MockFetcher, DEFAULT_USER_AGENT};
pub use pipeline::{normalize_url, parse_page, MetadataExtractor};
pub use traits::fetcher::{FetchedPage, PageFetcher};
pub use types::metadata::{
    PageMetadata, ProjectMetadata, DEFAULT_PHASE, IMPORTED_TAG, NO_DESCRIPTION,
    SCRAPE_FAILED_DESCRIPTION,
};
