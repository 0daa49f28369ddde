// HTTP routes
pub mod backlog;
pub mod health;
pub mod og_metadata;
pub mod projects;
pub mod submissions;

pub use backlog::*;
pub use health::*;
pub use og_metadata::*;
pub use projects::*;
pub use submissions::*;

use serde::Serialize;
use tracing::info;

use crate::common::{AppError, AppResult, Id};

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Path ids that are not UUIDs cannot name a record, so they are a 404.
pub(crate) fn parse_id<T>(raw: &str, entity: &str) -> AppResult<Id<T>> {
    Id::parse(raw).map_err(|_| {
        info!(entity, id = %raw, "Path id is not a UUID");
        AppError::not_found(format!("{} not found", entity))
    })
}
