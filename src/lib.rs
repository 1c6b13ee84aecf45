//! Presenca - Room Presence Tracking Library
//!
//! This crate provides the core functionality for the presence tracking
//! service. It can be used as a library by other Rust projects, or run as a
//! standalone binary with the `presenca` executable.
//!
//! # Architecture
//!
//! - **Storage**: SQLite-based persistence layer with one typed facade per
//!   table (`pessoas`, `salas`, `pessoas_salas`)
//! - **Server**: Axum HTTP API plus static site serving
//! - **Config**: YAML configuration with CLI/env overrides

pub mod config;
pub mod server;
pub mod storage;

pub use config::AppConfig;
pub use server::{AppState, create_router};
pub use storage::{StorageBuilder, StorageHandles, StoreError};
