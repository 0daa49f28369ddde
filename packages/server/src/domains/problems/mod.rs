// Problems domain - problem statements submitted by users

pub mod actions;
pub mod models;

pub use models::*;
