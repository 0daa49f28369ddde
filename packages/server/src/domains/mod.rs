// Business domains
pub mod backlog;
pub mod join_requests;
pub mod problems;
pub mod projects;
