pub mod join_request;

pub use join_request::{JoinRequest, NewJoinRequest};
