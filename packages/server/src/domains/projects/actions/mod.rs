//! Project domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers.
//! They validate input, talk to the store through `ServerDeps`, and return
//! final models or an `AppError`.

mod crud;
mod register;
mod seed;

pub use crud::{
    create_project, delete_project, get_project, list_projects, update_project, CreateProjectInput,
};
pub use register::{register_project, validate_project_url, RegisterProjectInput};
pub use seed::{seed_welcome_project, WELCOME_TITLE};
