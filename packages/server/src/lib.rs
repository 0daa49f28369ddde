// 10,000 Ideas - API Core
//
// Backend for a public board of side projects: projects register by URL
// (metadata scraped from the page), plus a voted idea backlog, join
// requests and problem submissions.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
