//! Storage backends.
//!
//! - `PostgresStore` - sqlx over PostgreSQL (production)
//! - `MemoryStore` - process-local maps (tests, local development)

mod memory;
mod postgres;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::kernel::traits::BaseStore;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Open the backend named in config. Postgres is migrated before use.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn BaseStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORE_BACKEND=postgres")?;

            info!("Connecting to database...");
            let store = PostgresStore::connect(database_url).await?;
            info!("Database connected");

            info!("Running database migrations...");
            store.migrate().await?;
            info!("Migrations complete");

            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
