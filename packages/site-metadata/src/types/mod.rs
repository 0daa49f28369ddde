//! Data types for the metadata library.

pub mod metadata;
