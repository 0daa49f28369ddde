//! Server dependencies for domain actions (using traits for testability)

use std::sync::Arc;

use site_metadata::MetadataExtractor;

use crate::kernel::BaseStore;

/// Collaborators every action can reach. Cheap to clone.
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseStore>,
    /// Fetches project pages and reads their metadata
    pub extractor: MetadataExtractor,
}

impl ServerDeps {
    pub fn new(store: Arc<dyn BaseStore>, extractor: MetadataExtractor) -> Self {
        Self { store, extractor }
    }
}
