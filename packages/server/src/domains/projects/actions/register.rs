//! Register a project from its URL.
//!
//! Scrape the page for metadata, then store exactly one new project built
//! from it. Scrape failures degrade to placeholder metadata; storage
//! failures are returned to the caller.

use serde::Deserialize;
use site_metadata::normalize_url;
use tracing::{error, info, warn};
use url::Url;

use crate::common::{required, AppError, AppResult};
use crate::domains::projects::models::{NewProject, Project};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterProjectInput {
    pub url: Option<String>,
}

/// Check the submitted URL: present, non-blank, http(s) once normalized.
///
/// Returns the normalized string, which becomes the project's `url`.
pub fn validate_project_url(raw: Option<String>) -> AppResult<String> {
    let raw = required(raw).ok_or_else(|| AppError::validation("URL is required"))?;
    let normalized = normalize_url(&raw);

    let parsed = Url::parse(&normalized)
        .map_err(|e| AppError::validation(format!("Invalid URL '{}': {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(normalized),
        scheme => Err(AppError::validation(format!(
            "Invalid URL '{}': unsupported scheme '{}'",
            raw, scheme
        ))),
    }
}

pub async fn register_project(input: RegisterProjectInput, deps: &ServerDeps) -> AppResult<Project> {
    let raw_url = input.url.clone();
    let url = validate_project_url(input.url).map_err(|e| {
        warn!(operation = "register_project", url = ?raw_url, error = %e, "Rejected project URL");
        e
    })?;

    let metadata = deps.extractor.extract(&url).await;

    let new_project = NewProject::builder()
        .title(metadata.title)
        .description(metadata.description)
        .url(Some(url.clone()))
        .image_url(metadata.image_url)
        .favicon(metadata.favicon)
        .phase(metadata.phase)
        .tags(metadata.tags)
        .needs(metadata.needs)
        .build();

    let project = deps.store.insert_project(new_project).await.map_err(|e| {
        error!(url = %url, error = %e, "register_project: insert failed");
        AppError::Dependency(e)
    })?;

    info!(
        project_id = %project.id,
        url = %url,
        title = %project.title,
        "Registered project"
    );

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_url() {
        assert_eq!(
            validate_project_url(Some("https://example.com".into())).unwrap(),
            "https://example.com"
        );
        assert_eq!(
            validate_project_url(Some("example.com/app".into())).unwrap(),
            "https://example.com/app"
        );
    }

    #[test]
    fn test_validate_project_url_rejects_bad_input() {
        for bad in [None, Some(""), Some("   "), Some("ftp://example.com"), Some("https://")] {
            let result = validate_project_url(bad.map(str::to_string));
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "expected validation error for {:?}",
                bad
            );
        }
    }
}
