//! SQLite persistence

pub mod kv_repository;
pub mod manager;

pub use kv_repository::SqliteKeyValueStore;
pub use manager::{DbManager, SqliteConnection};
