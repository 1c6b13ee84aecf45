//! Room storage facade.

use crate::storage::types::Sala;
use crate::storage::{SqlitePool, StoreError};

/// Storage facade for rooms.
#[derive(Debug, Clone)]
pub struct RoomStore {
    pool: SqlitePool,
}

impl RoomStore {
    /// Create a new room store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all rooms, ordered by id.
    pub async fn list(&self) -> Result<Vec<Sala>, StoreError> {
        let rows = sqlx::query_as::<_, Sala>("SELECT id, nome FROM salas ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;
        Ok(rows)
    }

    /// Insert a new room and return the assigned id.
    pub async fn insert(&self, nome: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO salas (nome) VALUES (?)")
            .bind(nome)
            .execute(self.pool.inner())
            .await?;
        Ok(result.last_insert_rowid())
    }
}
