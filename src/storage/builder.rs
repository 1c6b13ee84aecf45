//! Storage builder and handles.
//!
//! Provides a builder for constructing the storage layer and a handles
//! struct for accessing all store facades.

use std::path::{Path, PathBuf};

use crate::storage::schema::init_schema;
use crate::storage::{PassageStore, PersonStore, RoomStore, SqlitePool, StoreError};

/// Default maximum connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 4;

/// Builder for constructing the storage layer.
pub struct StorageBuilder {
    db_path: PathBuf,
    max_connections: u32,
}

impl StorageBuilder {
    /// Create a new storage builder for the database file at `db_path`.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Connect to the database, apply the schema, and return handles.
    pub async fn build(self) -> Result<StorageHandles, StoreError> {
        let pool = SqlitePool::connect(&self.db_path, self.max_connections).await?;
        init_schema(&pool).await?;

        Ok(StorageHandles {
            people: PersonStore::new(pool.clone()),
            rooms: RoomStore::new(pool.clone()),
            passages: PassageStore::new(pool.clone()),
            pool,
        })
    }
}

/// Handles to all storage facades.
#[derive(Clone)]
pub struct StorageHandles {
    /// Facade for the `pessoas` table.
    pub people: PersonStore,
    /// Facade for the `salas` table.
    pub rooms: RoomStore,
    /// Facade for the `pessoas_salas` table.
    pub passages: PassageStore,
    pool: SqlitePool,
}

impl StorageHandles {
    /// Verify the database is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.pool.ping().await
    }

    /// Gracefully close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
