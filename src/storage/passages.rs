//! Room assignment storage facade.
//!
//! A person holds at most one assignment row at any time. Registering a
//! passage either inserts the first row for that person or fully overwrites
//! the existing one, including clearing timestamps that were not resent.

use crate::storage::types::Passagem;
use crate::storage::{SqlitePool, StoreError};

/// Outcome of recording a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageOutcome {
    /// No assignment existed for the person; a new row was inserted.
    Inserted,
    /// An existing assignment was overwritten.
    Updated,
}

/// Storage facade for room assignments.
#[derive(Debug, Clone)]
pub struct PassageStore {
    pool: SqlitePool,
}

impl PassageStore {
    /// Create a new passage store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the current assignment for a person, if any.
    pub async fn get_by_person(&self, id_pessoa: i64) -> Result<Option<Passagem>, StoreError> {
        let row = sqlx::query_as::<_, Passagem>(
            "SELECT id, id_pessoa, id_sala, data_entrada, data_saida
             FROM pessoas_salas WHERE id_pessoa = ?",
        )
        .bind(id_pessoa)
        .fetch_optional(self.pool.inner())
        .await?;
        Ok(row)
    }

    /// Record a passage for a person, keyed by `id_pessoa`.
    ///
    /// Select and insert/update run in one transaction, so concurrent
    /// registrations for the same person cannot produce duplicate rows. The
    /// overwrite is total: an omitted timestamp becomes NULL even if the
    /// previous row carried a value.
    pub async fn record(
        &self,
        id_pessoa: i64,
        id_sala: i64,
        data_entrada: Option<&str>,
        data_saida: Option<&str>,
    ) -> Result<PassageOutcome, StoreError> {
        let mut tx = self.pool.inner().begin().await?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM pessoas_salas WHERE id_pessoa = ?")
                .bind(id_pessoa)
                .fetch_optional(&mut *tx)
                .await?;

        let outcome = match existing {
            None => {
                sqlx::query(
                    "INSERT INTO pessoas_salas (id_pessoa, id_sala, data_entrada, data_saida)
                     VALUES (?, ?, ?, ?)",
                )
                .bind(id_pessoa)
                .bind(id_sala)
                .bind(data_entrada)
                .bind(data_saida)
                .execute(&mut *tx)
                .await?;
                PassageOutcome::Inserted
            }
            Some(_) => {
                sqlx::query(
                    "UPDATE pessoas_salas SET id_sala = ?, data_entrada = ?, data_saida = ?
                     WHERE id_pessoa = ?",
                )
                .bind(id_sala)
                .bind(data_entrada)
                .bind(data_saida)
                .bind(id_pessoa)
                .execute(&mut *tx)
                .await?;
                PassageOutcome::Updated
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }
}
