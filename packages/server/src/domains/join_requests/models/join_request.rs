use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{JoinRequestId, ProjectId};

/// Someone asking to join a project's team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub project_id: ProjectId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJoinRequest {
    pub project_id: ProjectId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub message: Option<String>,
}

impl NewJoinRequest {
    pub fn into_request(self, id: JoinRequestId, created_at: DateTime<Utc>) -> JoinRequest {
        JoinRequest {
            id,
            project_id: self.project_id,
            name: self.name,
            email: self.email,
            role: self.role,
            message: self.message,
            created_at,
        }
    }
}

impl JoinRequest {
    pub async fn create(id: JoinRequestId, new: NewJoinRequest, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO join_requests (id, project_id, name, email, role, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.project_id)
        .bind(new.name)
        .bind(new.email)
        .bind(new.role)
        .bind(new.message)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
