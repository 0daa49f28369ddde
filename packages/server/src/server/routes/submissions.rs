//! Write-only submissions: join requests and problem statements.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};

use crate::common::AppResult;
use crate::domains::join_requests::actions::{submit_join_request, JoinRequestInput};
use crate::domains::join_requests::models::JoinRequest;
use crate::domains::problems::actions::{submit_problem, ProblemInput};
use crate::domains::problems::models::Problem;
use crate::server::app::AppState;

/// `POST /api/join-requests`
pub async fn join_request_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<JoinRequestInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<JoinRequest>)> {
    let Json(input) = payload?;
    let request = submit_join_request(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// `POST /api/problems`
pub async fn problem_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ProblemInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Problem>)> {
    let Json(input) = payload?;
    let problem = submit_problem(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}
