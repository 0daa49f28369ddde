// Common types and utilities shared across the application

pub mod entity_ids;
pub mod error;
pub mod id;

pub use entity_ids::{BacklogIdeaId, JoinRequestId, ProblemId, ProjectId};
pub use error::{required, AppError, AppResult};
pub use id::Id;
