//! Row types for the storage layer.

use serde::Serialize;
use sqlx::FromRow;

/// A person record (`pessoas` row).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pessoa {
    pub id: i64,
    pub nome: String,
}

/// A room record (`salas` row).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sala {
    pub id: i64,
    pub nome: String,
}

/// A room assignment record (`pessoas_salas` row).
///
/// At most one row exists per `id_pessoa`. Entry and exit timestamps are
/// free-form strings supplied by the client; either may be absent.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Passagem {
    pub id: i64,
    pub id_pessoa: i64,
    pub id_sala: i64,
    pub data_entrada: Option<String>,
    pub data_saida: Option<String>,
}
