//! Sample data for a fresh board.

use anyhow::Result;
use tracing::info;

use crate::domains::projects::models::{NewProject, Project};
use crate::kernel::BaseStore;

pub const WELCOME_TITLE: &str = "Welcome to 10,000 IDEAS";

fn welcome_project() -> NewProject {
    NewProject::builder()
        .title(WELCOME_TITLE)
        .description("Your first project is live! Register your own by URL or add more projects through the API.")
        .phase("Launch")
        .tags(vec!["welcome".to_string(), "demo".to_string()])
        .build()
}

/// Insert the welcome project if the board is empty.
///
/// Returns the inserted project, or `None` when projects already exist.
pub async fn seed_welcome_project(store: &dyn BaseStore) -> Result<Option<Project>> {
    let existing = store.count_projects().await?;
    if existing > 0 {
        info!(existing, "Projects already present, skipping seed");
        return Ok(None);
    }

    let project = store.insert_project(welcome_project()).await?;
    info!(project_id = %project.id, "Seeded welcome project");
    Ok(Some(project))
}
