// Join requests domain - people asking to join a project team

pub mod actions;
pub mod models;

pub use models::*;
