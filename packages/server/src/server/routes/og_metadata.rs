use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use site_metadata::PageMetadata;
use tracing::warn;
use url::Url;

use crate::common::{required, AppError, AppResult};
use crate::server::app::AppState;

/// Error body for a preview whose page could not be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch metadata";

#[derive(Debug, Deserialize)]
pub struct OgMetadataQuery {
    pub url: Option<String>,
}

/// Raw preview metadata. Absent tags are `null`, no fallbacks applied.
#[derive(Debug, Serialize)]
pub struct OgMetadataResponse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub favicon: Option<String>,
}

impl From<PageMetadata> for OgMetadataResponse {
    fn from(page: PageMetadata) -> Self {
        Self {
            title: page.title,
            description: page.description,
            image: page.image,
            favicon: page.favicon,
        }
    }
}

/// `GET /api/og-metadata?url=`
pub async fn og_metadata_handler(
    Extension(state): Extension<AppState>,
    query: Result<Query<OgMetadataQuery>, QueryRejection>,
) -> AppResult<Json<OgMetadataResponse>> {
    let Query(query) = query?;
    let raw = required(query.url).ok_or_else(|| {
        warn!(operation = "og_metadata", "Rejected preview: URL is required");
        AppError::validation("URL is required")
    })?;

    let url = Url::parse(&raw)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
        .ok_or_else(|| {
            warn!(operation = "og_metadata", url = %raw, "Rejected preview: invalid URL");
            AppError::validation(format!("Invalid URL '{}'", raw))
        })?;

    let page = state.deps.extractor.scrape(&url).await.map_err(|e| {
        warn!(operation = "og_metadata", url = %url, error = %e, "Fetch failed");
        AppError::upstream(FETCH_FAILED_MESSAGE, e)
    })?;

    Ok(Json(page.into()))
}
