use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::common::AppResult;
use crate::domains::projects::actions::{self, CreateProjectInput, RegisterProjectInput};
use crate::domains::projects::models::{Project, ProjectUpdate};
use crate::server::app::AppState;
use crate::server::routes::{parse_id, SuccessResponse};

#[derive(Serialize)]
pub struct RegisterProjectResponse {
    pub success: bool,
    pub project: Project,
}

/// `POST /api/register-project`
pub async fn register_project_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<RegisterProjectInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegisterProjectResponse>)> {
    let Json(input) = payload?;
    let project = actions::register_project(input, &state.deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterProjectResponse {
            success: true,
            project,
        }),
    ))
}

/// `GET /api/projects`
pub async fn list_projects_handler(
    Extension(state): Extension<AppState>,
) -> AppResult<Json<Vec<Project>>> {
    Ok(Json(actions::list_projects(&state.deps).await?))
}

/// `POST /api/projects`
pub async fn create_project_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateProjectInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload?;
    let project = actions::create_project(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /api/projects/:id`
pub async fn get_project_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_id(&id, "Project")?;
    Ok(Json(actions::get_project(id, &state.deps).await?))
}

/// `PATCH /api/projects/:id`
pub async fn update_project_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectUpdate>, JsonRejection>,
) -> AppResult<Json<Project>> {
    let id = parse_id(&id, "Project")?;
    let Json(update) = payload?;
    Ok(Json(actions::update_project(id, update, &state.deps).await?))
}

/// `DELETE /api/projects/:id`
pub async fn delete_project_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&id, "Project")?;
    actions::delete_project(id, &state.deps).await?;
    Ok(Json(SuccessResponse { success: true }))
}
