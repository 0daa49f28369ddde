// Projects domain - the board of ideas being built
//
// Responsibilities:
// - Registering a project from its URL (metadata scraped from the page)
// - Manual create / read / patch / delete

pub mod actions;
pub mod models;

pub use models::*;
