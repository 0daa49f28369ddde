//! Backlog actions: submit ideas, rank them, vote.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::common::{required, AppError, AppResult, BacklogIdeaId};
use crate::domains::backlog::models::{BacklogIdea, NewBacklogIdea};
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitIdeaInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub skills: Option<String>,
    pub author: Option<String>,
}

impl SubmitIdeaInput {
    fn validate(self) -> AppResult<NewBacklogIdea> {
        match (
            required(self.title),
            required(self.description),
            required(self.category),
            required(self.skills),
            required(self.author),
        ) {
            (Some(title), Some(description), Some(category), Some(skills), Some(author)) => {
                Ok(NewBacklogIdea {
                    title,
                    description,
                    category,
                    skills,
                    author,
                })
            }
            _ => Err(AppError::validation("Missing required fields")),
        }
    }
}

pub async fn list_backlog(deps: &ServerDeps) -> AppResult<Vec<BacklogIdea>> {
    deps.store.list_backlog_by_votes().await.map_err(|e| {
        error!(error = %e, "list_backlog failed");
        AppError::Dependency(e)
    })
}

pub async fn submit_idea(input: SubmitIdeaInput, deps: &ServerDeps) -> AppResult<BacklogIdea> {
    let title = input.title.clone();
    let new_idea = input.validate().map_err(|e| {
        warn!(operation = "submit_idea", title = ?title, error = %e, "Rejected backlog idea");
        e
    })?;

    let idea = deps.store.insert_backlog_idea(new_idea).await.map_err(|e| {
        error!(error = %e, "submit_idea: insert failed");
        AppError::Dependency(e)
    })?;

    info!(idea_id = %idea.id, title = %idea.title, "Backlog idea submitted");
    Ok(idea)
}

pub async fn vote_for_idea(id: BacklogIdeaId, deps: &ServerDeps) -> AppResult<BacklogIdea> {
    let idea = deps
        .store
        .increment_backlog_votes(id)
        .await
        .map_err(|e| {
            error!(idea_id = %id, error = %e, "vote_for_idea failed");
            AppError::Dependency(e)
        })?
        .ok_or_else(|| {
            info!(operation = "vote_for_idea", idea_id = %id, "Backlog idea not found");
            AppError::not_found("Backlog idea not found")
        })?;

    info!(idea_id = %id, votes = idea.votes, "Vote recorded");
    Ok(idea)
}
