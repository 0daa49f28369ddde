//! Join request actions.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::common::{required, AppError, AppResult, ProjectId};
use crate::domains::join_requests::models::{JoinRequest, NewJoinRequest};
use crate::kernel::ServerDeps;

lazy_static! {
    // something@something.tld, no whitespace
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid");
}

/// Body of `POST /api/join-requests`. Field names follow the web client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestInput {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl JoinRequestInput {
    fn validate(self) -> AppResult<NewJoinRequest> {
        let (project_id, name, email, role) = match (
            required(self.project_id),
            required(self.name),
            required(self.email),
            required(self.role),
        ) {
            (Some(p), Some(n), Some(e), Some(r)) => (p, n, e, r),
            _ => return Err(AppError::validation("Missing required fields")),
        };

        if !is_valid_email(&email) {
            return Err(AppError::validation("Invalid email format"));
        }

        let project_id = ProjectId::parse(&project_id)
            .map_err(|_| AppError::validation("Invalid projectId"))?;

        Ok(NewJoinRequest {
            project_id,
            name,
            email,
            role,
            message: required(self.message),
        })
    }
}

pub async fn submit_join_request(
    input: JoinRequestInput,
    deps: &ServerDeps,
) -> AppResult<JoinRequest> {
    let raw_project_id = input.project_id.clone();
    let new_request = input.validate().map_err(|e| {
        warn!(
            operation = "submit_join_request",
            project_id = ?raw_project_id,
            error = %e,
            "Rejected join request"
        );
        e
    })?;
    let project_id = new_request.project_id;

    let request = deps
        .store
        .insert_join_request(new_request)
        .await
        .map_err(|e| {
            error!(project_id = %project_id, error = %e, "submit_join_request: insert failed");
            AppError::Dependency(e)
        })?;

    info!(
        join_request_id = %request.id,
        project_id = %project_id,
        role = %request.role,
        "Join request submitted"
    );
    Ok(request)
}
