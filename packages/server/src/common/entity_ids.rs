//! Typed ids for every stored entity.

pub use super::id::Id;

/// Marker type for Project entities.
pub struct Project;

/// Marker type for BacklogIdea entities (community idea backlog).
pub struct BacklogIdea;

/// Marker type for JoinRequest entities.
pub struct JoinRequest;

/// Marker type for Problem entities (submitted problem statements).
pub struct Problem;

pub type ProjectId = Id<Project>;
pub type BacklogIdeaId = Id<BacklogIdea>;
pub type JoinRequestId = Id<JoinRequest>;
pub type ProblemId = Id<Problem>;
