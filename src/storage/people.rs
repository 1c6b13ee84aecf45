//! Person storage facade.
//!
//! CRUD operations on the `pessoas` table.

use crate::storage::types::Pessoa;
use crate::storage::{SqlitePool, StoreError};

/// Storage facade for people.
#[derive(Debug, Clone)]
pub struct PersonStore {
    pool: SqlitePool,
}

impl PersonStore {
    /// Create a new person store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all people, ordered by id.
    pub async fn list(&self) -> Result<Vec<Pessoa>, StoreError> {
        let rows = sqlx::query_as::<_, Pessoa>("SELECT id, nome FROM pessoas ORDER BY id")
            .fetch_all(self.pool.inner())
            .await?;
        Ok(rows)
    }

    /// Fetch the person with the given id.
    ///
    /// Returns a vector with zero or one element, mirroring the filtered
    /// select it executes.
    pub async fn get(&self, id: i64) -> Result<Vec<Pessoa>, StoreError> {
        let rows = sqlx::query_as::<_, Pessoa>("SELECT id, nome FROM pessoas WHERE id = ?")
            .bind(id)
            .fetch_all(self.pool.inner())
            .await?;
        Ok(rows)
    }

    /// Insert a new person and return the assigned id.
    pub async fn insert(&self, nome: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO pessoas (nome) VALUES (?)")
            .bind(nome)
            .execute(self.pool.inner())
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete a person and any room assignment they hold.
    ///
    /// Both deletes run in one transaction. Returns `true` if a person row
    /// was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.inner().begin().await?;

        sqlx::query("DELETE FROM pessoas_salas WHERE id_pessoa = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM pessoas WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all people.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pessoas")
            .fetch_one(self.pool.inner())
            .await?;
        Ok(row.0)
    }
}
