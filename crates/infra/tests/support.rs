//! Shared helpers for infra integration tests

#![allow(dead_code)]

use std::sync::Arc;

use boardcount_core::{KeyValueStore, RosterSettings, RosterStore};
use boardcount_domain::{StorageBackend, StorageConfig};
use boardcount_infra::storage::open_store;
use tempfile::TempDir;

/// Storage opened in a temporary directory that lives as long as the value.
pub struct TestStorage {
    pub config: StorageConfig,
    pub store: Arc<dyn KeyValueStore>,
    _temp_dir: TempDir,
}

impl TestStorage {
    pub fn new(backend: StorageBackend) -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let file_name = match backend {
            StorageBackend::Json => "boardcount.json",
            _ => "boardcount.db",
        };
        let config = StorageConfig {
            backend,
            path: temp_dir.path().join(file_name).to_string_lossy().into_owned(),
            ..StorageConfig::default()
        };
        let store = open_store(&config).expect("storage should open");
        Self { config, store, _temp_dir: temp_dir }
    }

    /// Open the same backing file again, as a new process would.
    pub fn reopen(&self) -> Arc<dyn KeyValueStore> {
        open_store(&self.config).expect("storage should reopen")
    }

    pub fn roster_store(&self) -> RosterStore {
        RosterStore::load(Arc::clone(&self.store), RosterSettings::default())
    }
}
