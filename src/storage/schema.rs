//! Database schema definitions.

use crate::storage::{SqlitePool, StoreError};

/// SQL statement for creating the `pessoas` table.
pub const PESSOAS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS pessoas (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL
);
"#;

/// SQL statement for creating the `salas` table.
pub const SALAS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS salas (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL
);
"#;

/// SQL statement for creating the `pessoas_salas` assignment table.
///
/// `id_pessoa` is UNIQUE: a person has at most one assignment row, and the
/// constraint holds even under concurrent registrations.
pub const PESSOAS_SALAS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS pessoas_salas (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    id_pessoa    INTEGER NOT NULL UNIQUE REFERENCES pessoas(id),
    id_sala      INTEGER NOT NULL REFERENCES salas(id),
    data_entrada TEXT,
    data_saida   TEXT
);
"#;

/// Initialize the database schema.
///
/// Creates all tables if they don't exist; a pre-existing database is left
/// untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(PESSOAS_TABLE_DDL).execute(pool.inner()).await?;
    sqlx::query(SALAS_TABLE_DDL).execute(pool.inner()).await?;
    sqlx::query(PESSOAS_SALAS_TABLE_DDL)
        .execute(pool.inner())
        .await?;

    tracing::info!("Database schema initialized");
    Ok(())
}
