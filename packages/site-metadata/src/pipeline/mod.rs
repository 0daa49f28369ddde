//! Extraction pipeline.
//!
//! ```text
//! URL -> PageFetcher -> FetchedPage -> PageDocument -> PageMetadata -> ProjectMetadata
//! ```

pub mod document;
pub mod extract;
pub mod normalize;

pub use document::PageDocument;
pub use extract::{parse_page, MetadataExtractor};
pub use normalize::{normalize_url, resolve_against_origin, split_list};
