//! Storage Layer
//!
//! SQLite persistence for people, rooms and room assignments:
//! - **Pool**: shared sqlx connection pool (WAL mode)
//! - **Stores**: typed facades, one per table
//!
//! # Components
//!
//! - [`PersonStore`]: CRUD operations on `pessoas`
//! - [`RoomStore`]: insert/list operations on `salas`
//! - [`PassageStore`]: transactional upsert of `pessoas_salas` assignments
//! - [`StorageBuilder`] / [`StorageHandles`]: initialization and lifecycle management

mod builder;
mod db;
mod error;
pub mod passages;
pub mod people;
pub mod rooms;
mod schema;
mod types;

pub use builder::{StorageBuilder, StorageHandles};
pub use db::SqlitePool;
pub use error::StoreError;
pub use passages::{PassageOutcome, PassageStore};
pub use people::PersonStore;
pub use rooms::RoomStore;
pub use schema::init_schema;
pub use types::{Passagem, Pessoa, Sala};
