//! Core trait abstractions for the metadata library.

pub mod fetcher;
