//! # BoardCount Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Key-value store adapters (SQLite via r2d2, JSON file, in-memory)
//! - Configuration loading from files and environment variables
//! - Logging setup for binaries
//!
//! ## Architecture
//! - Implements traits defined in `boardcount-core`
//! - Depends on `boardcount-domain` and `boardcount-core`
//! - Contains all "impure" code (I/O, SQLite)

pub mod config;
pub mod database;
pub mod errors;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use database::{DbManager, SqliteKeyValueStore};
pub use errors::InfraError;
pub use storage::{open_store, JsonFileStore, MemoryStore};
