pub mod project;

pub use project::{NewProject, Project, ProjectUpdate};
