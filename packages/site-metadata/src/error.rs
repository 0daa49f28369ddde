//! Typed errors for the metadata library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Every network or
//! transport problem collapses into one [`FetchFailure`]: callers degrade the
//! same way whether the cause was DNS, a timeout or a 5xx.

use thiserror::Error;

/// A page could not be fetched.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {reason}")]
pub struct FetchFailure {
    /// URL that was requested
    pub url: String,

    /// Short human-readable cause (e.g. "HTTP 404 Not Found")
    pub reason: String,

    /// Underlying transport error, if any
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FetchFailure {
    /// Create a failure with only a reason.
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a failure wrapping a transport error.
    pub fn with_source(
        url: impl Into<String>,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchFailure>;
