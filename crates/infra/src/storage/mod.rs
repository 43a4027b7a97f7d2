//! Key-value store adapters and backend selection

pub mod json_file_store;
pub mod memory_store;

use std::sync::Arc;

use boardcount_core::KeyValueStore;
use boardcount_domain::{Result, StorageBackend, StorageConfig};
use tracing::info;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::database::{DbManager, SqliteKeyValueStore};

/// Open the backend named by `config`.
///
/// # Errors
/// Returns a storage error if the SQLite database or JSON file cannot be
/// opened.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    info!(backend = %config.backend, path = %config.path, "opening storage");

    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Sqlite => {
            let db = DbManager::new(&config.path, config.pool_size)?;
            Arc::new(SqliteKeyValueStore::new(Arc::new(db))?)
        }
        StorageBackend::Json => Arc::new(JsonFileStore::open(&config.path)?),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
