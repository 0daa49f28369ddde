//! In-memory storage for tests and local development.
//!
//! Data lives in process memory and is lost on restart.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::common::{BacklogIdeaId, JoinRequestId, ProblemId, ProjectId};
use crate::domains::backlog::models::{BacklogIdea, NewBacklogIdea};
use crate::domains::join_requests::models::{JoinRequest, NewJoinRequest};
use crate::domains::problems::models::{NewProblem, Problem};
use crate::domains::projects::models::{NewProject, Project, ProjectUpdate};
use crate::kernel::traits::{
    BaseBacklogStore, BaseJoinRequestStore, BaseProblemStore, BaseProjectStore, BaseStoreHealth,
};

#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
    backlog: RwLock<HashMap<BacklogIdeaId, BacklogIdea>>,
    join_requests: RwLock<HashMap<JoinRequestId, JoinRequest>>,
    problems: RwLock<HashMap<ProblemId, Problem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn join_request_count(&self) -> usize {
        self.join_requests.read().await.len()
    }

    pub async fn problem_count(&self) -> usize {
        self.problems.read().await.len()
    }

    /// Remove everything.
    pub async fn clear(&self) {
        self.projects.write().await.clear();
        self.backlog.write().await.clear();
        self.join_requests.write().await.clear();
        self.problems.write().await.clear();
    }
}

#[async_trait]
impl BaseProjectStore for MemoryStore {
    async fn insert_project(&self, project: NewProject) -> Result<Project> {
        let project = project.into_project(ProjectId::new(), Utc::now());
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn update_project(&self, id: ProjectId, update: ProjectUpdate) -> Result<Option<Project>> {
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            update.apply(project);
            project.clone()
        }))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<bool> {
        Ok(self.projects.write().await.remove(&id).is_some())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.projects.read().await.values().cloned().collect();
        // v7 ids break ties between identical timestamps
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn count_projects(&self) -> Result<i64> {
        Ok(self.projects.read().await.len() as i64)
    }
}

#[async_trait]
impl BaseBacklogStore for MemoryStore {
    async fn insert_backlog_idea(&self, idea: NewBacklogIdea) -> Result<BacklogIdea> {
        let idea = idea.into_idea(BacklogIdeaId::new(), Utc::now());
        self.backlog.write().await.insert(idea.id, idea.clone());
        Ok(idea)
    }

    async fn find_backlog_idea(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        Ok(self.backlog.read().await.get(&id).cloned())
    }

    async fn list_backlog_by_votes(&self) -> Result<Vec<BacklogIdea>> {
        let mut ideas: Vec<BacklogIdea> = self.backlog.read().await.values().cloned().collect();
        ideas.sort_by(|a, b| {
            b.votes
                .cmp(&a.votes)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.cmp(&a.id))
        });
        Ok(ideas)
    }

    async fn increment_backlog_votes(&self, id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        let mut backlog = self.backlog.write().await;
        Ok(backlog.get_mut(&id).map(|idea| {
            idea.votes += 1;
            idea.clone()
        }))
    }
}

#[async_trait]
impl BaseJoinRequestStore for MemoryStore {
    async fn insert_join_request(&self, request: NewJoinRequest) -> Result<JoinRequest> {
        let request = request.into_request(JoinRequestId::new(), Utc::now());
        self.join_requests
            .write()
            .await
            .insert(request.id, request.clone());
        Ok(request)
    }
}

#[async_trait]
impl BaseProblemStore for MemoryStore {
    async fn insert_problem(&self, problem: NewProblem) -> Result<Problem> {
        let problem = problem.into_problem(ProblemId::new(), Utc::now());
        self.problems
            .write()
            .await
            .insert(problem.id, problem.clone());
        Ok(problem)
    }
}

#[async_trait]
impl BaseStoreHealth for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(title: &str) -> NewBacklogIdea {
        NewBacklogIdea {
            title: title.into(),
            description: "d".into(),
            category: "c".into(),
            skills: "s".into(),
            author: "a".into(),
        }
    }

    #[tokio::test]
    async fn test_project_crud() {
        let store = MemoryStore::new();
        let created = store
            .insert_project(NewProject::builder().title("T").description("D").build())
            .await
            .unwrap();

        assert_eq!(store.find_project(created.id).await.unwrap(), Some(created.clone()));

        let updated = store
            .update_project(
                created.id,
                ProjectUpdate {
                    phase: Some("MVP".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.phase, "MVP");
        assert_eq!(updated.title, "T");

        assert!(store.delete_project(created.id).await.unwrap());
        assert!(!store.delete_project(created.id).await.unwrap());
        assert_eq!(store.find_project(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_project_is_none() {
        let store = MemoryStore::new();
        let result = store
            .update_project(ProjectId::new(), ProjectUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_projects_newest_first() {
        let store = MemoryStore::new();
        let first = store
            .insert_project(NewProject::builder().title("first").description("d").build())
            .await
            .unwrap();
        let second = store
            .insert_project(NewProject::builder().title("second").description("d").build())
            .await
            .unwrap();

        let listed = store.list_projects().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
        assert_eq!(store.count_projects().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_backlog_votes_order() {
        let store = MemoryStore::new();
        let low = store.insert_backlog_idea(idea("low")).await.unwrap();
        let high = store.insert_backlog_idea(idea("high")).await.unwrap();
        assert_eq!(low.votes, 1);

        store.increment_backlog_votes(high.id).await.unwrap();
        let voted = store.increment_backlog_votes(high.id).await.unwrap().unwrap();
        assert_eq!(voted.votes, 3);

        let ranked = store.list_backlog_by_votes().await.unwrap();
        assert_eq!(ranked[0].title, "high");
        assert_eq!(ranked[1].title, "low");

        assert!(store
            .increment_backlog_votes(BacklogIdeaId::new())
            .await
            .unwrap()
            .is_none());
    }
}
