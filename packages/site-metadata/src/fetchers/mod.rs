//! Fetcher implementations.
//!
//! - `HttpFetcher` - reqwest GET with the scraper user agent
//! - `MockFetcher` - for testing

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_USER_AGENT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, PageFetcher};
