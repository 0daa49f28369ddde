//! PostgreSQL storage backed by sqlx.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::common::{BacklogIdeaId, JoinRequestId, ProblemId, ProjectId};
use crate::domains::backlog::models::{BacklogIdea, NewBacklogIdea};
use crate::domains::join_requests::models::{JoinRequest, NewJoinRequest};
use crate::domains::problems::models::{NewProblem, Problem};
use crate::domains::projects::models::{NewProject, Project, ProjectUpdate};
use crate::kernel::traits::{
    BaseBacklogStore, BaseJoinRequestStore, BaseProblemStore, BaseProjectStore, BaseStoreHealth,
};

/// Store over a shared connection pool. Cloning shares the pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations from `migrations/`.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseProjectStore for PostgresStore {
    async fn insert_project(&self, project: NewProject) -> Result<Project> {
        Project::create(ProjectId::new(), project, &self.pool)
            .await
            .context("Failed to insert project")
    }

    async fn find_project(&self, id: ProjectId) -> Result<Option<Project>> {
        Project::find_by_id(id, &self.pool)
            .await
            .with_context(|| format!("Failed to load project {}", id))
    }

    async fn update_project(&self, id: ProjectId, update: ProjectUpdate) -> Result<Option<Project>> {
        Project::update(id, update, &self.pool)
            .await
            .with_context(|| format!("Failed to update project {}", id))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool> {
        Project::delete(id, &self.pool)
            .await
            .with_context(|| format!("Failed to delete project {}", id))
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Project::find_all(&self.pool)
            .await
            .context("Failed to list projects")
    }

    async fn count_projects(&self) -> Result<i64> {
        Project::count(&self.pool)
            .await
            .context("Failed to count projects")
    }
}

#[async_trait]
impl BaseBacklogStore for PostgresStore {
    async fn insert_backlog_idea(&self, idea: NewBacklogIdea) -> Result<BacklogIdea> {
        BacklogIdea::create(BacklogIdeaId::new(), idea, &self.pool)
            .await
            .context("Failed to insert backlog idea")
    }

    async fn find_backlog_idea(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        BacklogIdea::find_by_id(id, &self.pool)
            .await
            .with_context(|| format!("Failed to load backlog idea {}", id))
    }

    async fn list_backlog_by_votes(&self) -> Result<Vec<BacklogIdea>> {
        BacklogIdea::find_by_votes(&self.pool)
            .await
            .context("Failed to list backlog ideas")
    }

    async fn increment_backlog_votes(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        BacklogIdea::increment_votes(id, &self.pool)
            .await
            .with_context(|| format!("Failed to vote for backlog idea {}", id))
    }
}

#[async_trait]
impl BaseJoinRequestStore for PostgresStore {
    async fn insert_join_request(&self, request: NewJoinRequest) -> Result<JoinRequest> {
        JoinRequest::create(JoinRequestId::new(), request, &self.pool)
            .await
            .context("Failed to insert join request")
    }
}

#[async_trait]
impl BaseProblemStore for PostgresStore {
    async fn insert_problem(&self, problem: NewProblem) -> Result<Problem> {
        Problem::create(ProblemId::new(), problem, &self.pool)
            .await
            .context("Failed to insert problem")
    }
}

#[async_trait]
impl BaseStoreHealth for PostgresStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
