//! Manual project management: list, create, read, patch, delete.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::common::{required, AppError, AppResult, ProjectId};
use crate::domains::projects::models::{NewProject, Project, ProjectUpdate};
use crate::kernel::ServerDeps;

/// Body of `POST /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub favicon: Option<String>,
    pub phase: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub needs: Option<Vec<String>>,
    pub is_todays_launch: Option<bool>,
    pub launched_date: Option<String>,
    pub audience: Option<String>,
    pub model: Option<String>,
    pub mrr: Option<String>,
    pub metric1_value: Option<String>,
    pub metric1_label: Option<String>,
    pub metric2_value: Option<String>,
    pub metric2_label: Option<String>,
    pub blocker: Option<String>,
    pub owner_name: Option<String>,
}

fn not_found(operation: &'static str, id: ProjectId) -> AppError {
    info!(operation, project_id = %id, "Project not found");
    AppError::not_found(format!("Project {} not found", id))
}

pub async fn list_projects(deps: &ServerDeps) -> AppResult<Vec<Project>> {
    deps.store.list_projects().await.map_err(|e| {
        error!(error = %e, "list_projects failed");
        AppError::Dependency(e)
    })
}

pub async fn create_project(input: CreateProjectInput, deps: &ServerDeps) -> AppResult<Project> {
    let (title, description) = match (required(input.title), required(input.description)) {
        (Some(title), Some(description)) => (title, description),
        _ => {
            warn!(operation = "create_project", "Rejected project: title and description are required");
            return Err(AppError::validation("Title and description are required"));
        }
    };

    // Blank optional labels fall back to the builder defaults
    let mut new_project = NewProject::builder()
        .title(title)
        .description(description)
        .url(required(input.url))
        .image_url(required(input.image_url))
        .favicon(required(input.favicon))
        .tags(input.tags.unwrap_or_default())
        .needs(input.needs.unwrap_or_default())
        .is_todays_launch(input.is_todays_launch.unwrap_or(false))
        .launched_date(required(input.launched_date))
        .audience(required(input.audience))
        .model(required(input.model))
        .metric1_value(required(input.metric1_value))
        .metric2_value(required(input.metric2_value))
        .blocker(required(input.blocker))
        .owner_name(required(input.owner_name))
        .build();

    if let Some(phase) = required(input.phase) {
        new_project.phase = phase;
    }
    if let Some(status) = required(input.status) {
        new_project.status = status;
    }
    if let Some(mrr) = required(input.mrr) {
        new_project.mrr = Some(mrr);
    }
    if let Some(label) = required(input.metric1_label) {
        new_project.metric1_label = Some(label);
    }
    if let Some(label) = required(input.metric2_label) {
        new_project.metric2_label = Some(label);
    }

    let project = deps.store.insert_project(new_project).await.map_err(|e| {
        error!(error = %e, "create_project: insert failed");
        AppError::Dependency(e)
    })?;

    info!(project_id = %project.id, title = %project.title, "Created project");
    Ok(project)
}

pub async fn get_project(id: ProjectId, deps: &ServerDeps) -> AppResult<Project> {
    deps.store
        .find_project(id)
        .await
        .map_err(|e| {
            error!(project_id = %id, error = %e, "get_project failed");
            AppError::Dependency(e)
        })?
        .ok_or_else(|| not_found("get_project", id))
}

pub async fn update_project(
    id: ProjectId,
    update: ProjectUpdate,
    deps: &ServerDeps,
) -> AppResult<Project> {
    let project = deps
        .store
        .update_project(id, update)
        .await
        .map_err(|e| {
            error!(project_id = %id, error = %e, "update_project failed");
            AppError::Dependency(e)
        })?
        .ok_or_else(|| not_found("update_project", id))?;

    info!(project_id = %id, "Updated project");
    Ok(project)
}

pub async fn delete_project(id: ProjectId, deps: &ServerDeps) -> AppResult<()> {
    let deleted = deps.store.delete_project(id).await.map_err(|e| {
        error!(project_id = %id, error = %e, "delete_project failed");
        AppError::Dependency(e)
    })?;

    if !deleted {
        return Err(not_found("delete_project", id));
    }

    info!(project_id = %id, "Deleted project");
    Ok(())
}
