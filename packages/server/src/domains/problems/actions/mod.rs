//! Problem submission.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::common::{required, AppError, AppResult};
use crate::domains::problems::models::{NewProblem, Problem};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInput {
    pub user: Option<String>,
    pub problem: Option<String>,
    pub job_to_be_done: Option<String>,
}

pub async fn submit_problem(input: ProblemInput, deps: &ServerDeps) -> AppResult<Problem> {
    let new_problem = match (
        required(input.user),
        required(input.problem),
        required(input.job_to_be_done),
    ) {
        (Some(user), Some(problem), Some(job_to_be_done)) => NewProblem {
            user,
            problem,
            job_to_be_done,
        },
        _ => {
            warn!(operation = "submit_problem", "Rejected problem: missing required fields");
            return Err(AppError::validation("Missing required fields"));
        }
    };

    let problem = deps.store.insert_problem(new_problem).await.map_err(|e| {
        error!(error = %e, "submit_problem: insert failed");
        AppError::Dependency(e)
    })?;

    info!(problem_id = %problem.id, "Problem submitted");
    Ok(problem)
}
