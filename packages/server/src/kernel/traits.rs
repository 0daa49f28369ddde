// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and defaulting live in domain actions that call these traits.
//
// Naming convention: Base* for trait names (e.g., BaseProjectStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{BacklogIdeaId, ProjectId};
use crate::domains::backlog::models::{BacklogIdea, NewBacklogIdea};
use crate::domains::join_requests::models::{JoinRequest, NewJoinRequest};
use crate::domains::problems::models::{NewProblem, Problem};
use crate::domains::projects::models::{NewProject, Project, ProjectUpdate};

// =============================================================================
// Projects
// =============================================================================

#[async_trait]
pub trait BaseProjectStore: Send + Sync {
    /// Persist a new project and return it with its id and timestamp.
    async fn insert_project(&self, project: NewProject) -> Result<Project>;

    async fn find_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// Apply a partial update. `None` when the project does not exist.
    async fn update_project(&self, id: ProjectId, update: ProjectUpdate) -> Result<Option<Project>>;

    /// `false` when the project does not exist.
    async fn delete_project(&self, id: ProjectId) -> Result<bool>;

    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    async fn count_projects(&self) -> Result<i64>;
}

// =============================================================================
// Backlog ideas
// =============================================================================

#[async_trait]
pub trait BaseBacklogStore: Send + Sync {
    async fn insert_backlog_idea(&self, idea: NewBacklogIdea) -> Result<BacklogIdea>;

    async fn find_backlog_idea(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>>;

    /// All ideas, most votes first.
    async fn list_backlog_by_votes(&self) -> Result<Vec<BacklogIdea>>;

    /// Add one vote. `None` when the idea does not exist.
    async fn increment_backlog_votes(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>>;
}

// =============================================================================
// Join requests / problems (write-only)
// =============================================================================

#[async_trait]
pub trait BaseJoinRequestStore: Send + Sync {
    async fn insert_join_request(&self, request: NewJoinRequest) -> Result<JoinRequest>;
}

#[async_trait]
pub trait BaseProblemStore: Send + Sync {
    async fn insert_problem(&self, problem: NewProblem) -> Result<Problem>;
}

// =============================================================================
// Health
// =============================================================================

#[async_trait]
pub trait BaseStoreHealth: Send + Sync {
    /// Cheap round trip to the backing store.
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}

/// Everything the HTTP layer needs from storage.
///
/// Automatically implemented for any type that implements every store trait.
pub trait BaseStore:
    BaseProjectStore + BaseBacklogStore + BaseJoinRequestStore + BaseProblemStore + BaseStoreHealth
{
}

impl<T> BaseStore for T where
    T: BaseProjectStore
        + BaseBacklogStore
        + BaseJoinRequestStore
        + BaseProblemStore
        + BaseStoreHealth
{
}
