// Backlog domain - community ideas waiting for a builder, ranked by votes

pub mod actions;
pub mod models;

pub use models::*;
