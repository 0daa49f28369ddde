use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ProblemId;

/// A problem statement: who has it, what hurts, and the job they need done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Problem {
    pub id: ProblemId,
    pub user: String,
    pub problem: String,
    pub job_to_be_done: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProblem {
    pub user: String,
    pub problem: String,
    pub job_to_be_done: String,
}

impl NewProblem {
    pub fn into_problem(self, id: ProblemId, created_at: DateTime<Utc>) -> Problem {
        Problem {
            id,
            user: self.user,
            problem: self.problem,
            job_to_be_done: self.job_to_be_done,
            created_at,
        }
    }
}

impl Problem {
    pub async fn create(id: ProblemId, new: NewProblem, pool: &PgPool) -> Result<Self> {
        // "user" is reserved in Postgres
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO problems (id, "user", problem, job_to_be_done)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.user)
        .bind(new.problem)
        .bind(new.job_to_be_done)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
