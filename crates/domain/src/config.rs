//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_CAPACITY, DEFAULT_DB_PATH, DEFAULT_POOL_SIZE, METADATA_KEY, NET_MEAL_OFFSET,
    PAGE_CAPACITY, ROSTER_KEY,
};
use crate::impl_domain_status_conversions;
use crate::{BoardCountError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

/// Key-value backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
    Memory,
}

impl_domain_status_conversions!(StorageBackend {
    Sqlite => "sqlite",
    Json => "json",
    Memory => "memory",
});

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// SQLite database file, or JSON document for the `json` backend
    pub path: String,
    pub pool_size: u32,
    pub roster_key: String,
    pub metadata_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: DEFAULT_DB_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            roster_key: ROSTER_KEY.to_string(),
            metadata_key: METADATA_KEY.to_string(),
        }
    }
}

/// How the `active`/`inactive` command keywords treat their slot numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationPolicy {
    /// Both keywords flip the slot, whatever its current status
    #[default]
    Toggle,
    /// `active` sets active, `inactive` sets inactive
    Force,
}

impl_domain_status_conversions!(ActivationPolicy {
    Toggle => "toggle",
    Force => "force",
});

/// Roster shape and business rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub base_capacity: u32,
    pub page_capacity: usize,
    pub activation_policy: ActivationPolicy,
    pub net_meal_offset: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            base_capacity: BASE_CAPACITY,
            page_capacity: PAGE_CAPACITY,
            activation_policy: ActivationPolicy::default(),
            net_meal_offset: NET_MEAL_OFFSET,
        }
    }
}

impl Config {
    /// Reject values the engine cannot work with
    ///
    /// # Errors
    /// Returns `BoardCountError::Config` for a zero base capacity, an odd or
    /// zero page capacity, or empty/identical storage keys.
    pub fn validate(&self) -> Result<()> {
        if self.roster.base_capacity == 0 {
            return Err(BoardCountError::Config("base_capacity must be at least 1".into()));
        }
        if self.roster.page_capacity == 0 || self.roster.page_capacity % 2 != 0 {
            return Err(BoardCountError::Config(format!(
                "page_capacity must be a positive even number, got {}",
                self.roster.page_capacity
            )));
        }
        if self.storage.roster_key.is_empty() || self.storage.metadata_key.is_empty() {
            return Err(BoardCountError::Config("storage keys must not be empty".into()));
        }
        if self.storage.roster_key == self.storage.metadata_key {
            return Err(BoardCountError::Config(
                "roster_key and metadata_key must differ".into(),
            ));
        }
        Ok(())
    }
}
