//! Test fixtures: sample pages and a store that always fails.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ideas_core::common::{BacklogIdeaId, ProjectId};
use ideas_core::domains::backlog::models::{BacklogIdea, NewBacklogIdea};
use ideas_core::domains::join_requests::models::{JoinRequest, NewJoinRequest};
use ideas_core::domains::problems::models::{NewProblem, Problem};
use ideas_core::domains::projects::models::{NewProject, Project, ProjectUpdate};
use ideas_core::kernel::{
    BaseBacklogStore, BaseJoinRequestStore, BaseProblemStore, BaseProjectStore, BaseStoreHealth,
};
use serde_json::{json, Value};

/// A landing page declaring every tag the extractor reads.
pub const FULL_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Fallback title</title>
  <meta property="og:title" content="Example">
  <meta property="og:description" content="An example project">
  <meta property="og:image" content="/og.png">
  <meta name="10k:phase" content="MVP">
  <meta name="10k:tags" content="ai, tools">
  <meta name="10k:needs" content="designer">
  <link rel="icon" href="/favicon.ico">
</head>
<body></body>
</html>"#;

/// A page with nothing but an og:title.
pub const TITLE_ONLY_PAGE: &str =
    r#"<html><head><meta property="og:title" content="Example"></head></html>"#;

pub fn backlog_idea_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Something worth building",
        "category": "tools",
        "skills": "rust",
        "author": "sam"
    })
}

/// Every operation fails as if the database were down.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations attempted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!("connection refused"))
    }
}

#[async_trait]
impl BaseProjectStore for FailingStore {
    async fn insert_project(&self, _project: NewProject) -> Result<Project> {
        self.fail()
    }

    async fn find_project(&self, _id: ProjectId) -> Result<Option<Project>> {
        self.fail()
    }

    async fn update_project(
        &self,
        _id: ProjectId,
        _update: ProjectUpdate,
    ) -> Result<Option<Project>> {
        self.fail()
    }

    async fn delete_project(&self, _id: ProjectId) -> Result<bool> {
        self.fail()
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.fail()
    }

    async fn count_projects(&self) -> Result<i64> {
        self.fail()
    }
}

#[async_trait]
impl BaseBacklogStore for FailingStore {
    async fn insert_backlog_idea(&self, _idea: NewBacklogIdea) -> Result<BacklogIdea> {
        self.fail()
    }

    async fn find_backlog_idea(&self, _id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        self.fail()
    }

    async fn list_backlog_by_votes(&self) -> Result<Vec<BacklogIdea>> {
        self.fail()
    }

    async fn increment_backlog_votes(&self, _id: BacklogIdeaId) -> Result<Option<BacklogIdea>> {
        self.fail()
    }
}

#[async_trait]
impl BaseJoinRequestStore for FailingStore {
    async fn insert_join_request(&self, _request: NewJoinRequest) -> Result<JoinRequest> {
        self.fail()
    }
}

#[async_trait]
impl BaseProblemStore for FailingStore {
    async fn insert_problem(&self, _problem: NewProblem) -> Result<Problem> {
        self.fail()
    }
}

#[async_trait]
impl BaseStoreHealth for FailingStore {
    async fn ping(&self) -> Result<()> {
        self.fail()
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
