//! Application context - wires configuration, storage and services

use std::sync::Arc;

use boardcount_core::{
    CommandInterpreter, KeyValueStore, ReportLayout, RosterSettings, RosterStore,
};
use boardcount_domain::{Config, Result};
use boardcount_infra::storage::open_store;
use tracing::debug;

/// Everything a command needs, built once per process
pub struct AppContext {
    pub config: Config,
    pub store: RosterStore,
    pub interpreter: CommandInterpreter,
    pub layout: ReportLayout,
}

impl AppContext {
    /// Open the configured storage and load the roster from it.
    ///
    /// # Errors
    /// Returns an error if the storage backend cannot be opened or the
    /// report layout is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let storage = open_store(&config.storage)?;
        Self::with_storage(config, storage)
    }

    /// Build on an already-open storage backend.
    ///
    /// # Errors
    /// Returns an error if the report layout is invalid.
    pub fn with_storage(config: Config, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let layout = ReportLayout::from_config(&config)?;
        let interpreter = CommandInterpreter::new(config.roster.activation_policy);
        let store = RosterStore::load(storage, RosterSettings::from(&config));
        debug!(
            backend = %config.storage.backend,
            policy = %interpreter.policy(),
            slots = store.roster().len(),
            "application context ready"
        );
        Ok(Self { config, store, interpreter, layout })
    }
}
