// Kernel: infrastructure traits, storage backends and the dependency container

pub mod deps;
pub mod stores;
pub mod traits;

pub use deps::ServerDeps;
pub use stores::{connect_store, MemoryStore, PostgresStore};
pub use traits::*;
