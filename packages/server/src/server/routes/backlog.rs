use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};

use crate::common::AppResult;
use crate::domains::backlog::actions::{self, SubmitIdeaInput};
use crate::domains::backlog::models::BacklogIdea;
use crate::server::app::AppState;
use crate::server::routes::parse_id;

/// `GET /api/backlog` - most votes first
pub async fn list_backlog_handler(
    Extension(state): Extension<AppState>,
) -> AppResult<Json<Vec<BacklogIdea>>> {
    Ok(Json(actions::list_backlog(&state.deps).await?))
}

/// `POST /api/backlog`
pub async fn submit_idea_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SubmitIdeaInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BacklogIdea>)> {
    let Json(input) = payload?;
    let idea = actions::submit_idea(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(idea)))
}

/// `POST /api/backlog/:id/vote`
pub async fn vote_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BacklogIdea>> {
    let id = parse_id(&id, "Backlog idea")?;
    Ok(Json(actions::vote_for_idea(id, &state.deps).await?))
}
