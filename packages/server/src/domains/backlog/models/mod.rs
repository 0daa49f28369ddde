pub mod backlog_idea;

pub use backlog_idea::{BacklogIdea, NewBacklogIdea};
