use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::BacklogIdeaId;

/// Community-submitted idea waiting for a builder. Ranked by votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BacklogIdea {
    pub id: BacklogIdeaId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub skills: String,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBacklogIdea {
    pub title: String,
    pub description: String,
    pub category: String,
    pub skills: String,
    pub author: String,
}

impl NewBacklogIdea {
    /// New ideas start with the author's own vote.
    pub const INITIAL_VOTES: i32 = 1;

    pub fn into_idea(self, id: BacklogIdeaId, created_at: DateTime<Utc>) -> BacklogIdea {
        BacklogIdea {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            skills: self.skills,
            author: self.author,
            votes: Self::INITIAL_VOTES,
            created_at,
        }
    }
}

impl BacklogIdea {
    pub async fn create(id: BacklogIdeaId, new: NewBacklogIdea, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO backlog_ideas (id, title, description, category, skills, author, votes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.category)
        .bind(new.skills)
        .bind(new.author)
        .bind(NewBacklogIdea::INITIAL_VOTES)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: BacklogIdeaId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM backlog_ideas WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Most votes first; ties broken newest first.
    pub async fn find_by_votes(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM backlog_ideas ORDER BY votes DESC, created_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Atomic `votes + 1`. Returns `None` when no row has this id.
    pub async fn increment_votes(id: BacklogIdeaId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE backlog_ideas SET votes = votes + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
