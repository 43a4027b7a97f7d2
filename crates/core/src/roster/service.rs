//! Roster store - sole owner and persister of roster state
//!
//! Every accepted mutation rewrites the affected record in full through the
//! injected [`KeyValueStore`]. Rejected mutations (unknown slot, empty or
//! duplicate name) leave both memory and storage untouched.

use std::sync::Arc;

use boardcount_domain::{
    Config, MetadataPatch, ReportMetadata, Result, Roster, SlotNumber, SlotStatus, StatusCounts,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::storage_ports::KeyValueStore;

/// Result of a mutation request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// State changed and was persisted
    Applied,
    /// Request was a no-op; nothing was written
    Unchanged,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Settings the store needs from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSettings {
    pub base_capacity: u32,
    pub roster_key: String,
    pub metadata_key: String,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for RosterSettings {
    fn from(config: &Config) -> Self {
        Self {
            base_capacity: config.roster.base_capacity,
            roster_key: config.storage.roster_key.clone(),
            metadata_key: config.storage.metadata_key.clone(),
        }
    }
}

/// Owning store for the roster and its report metadata
pub struct RosterStore {
    storage: Arc<dyn KeyValueStore>,
    settings: RosterSettings,
    roster: Roster,
    metadata: ReportMetadata,
    revision: u64,
}

impl RosterStore {
    /// Load persisted state, initializing a fresh roster when none exists.
    ///
    /// Never fails: unreadable or corrupt records are treated as absent. A
    /// fresh roster is written back immediately; if that write fails the
    /// error is logged and the in-memory roster is still returned.
    pub fn load(storage: Arc<dyn KeyValueStore>, settings: RosterSettings) -> Self {
        let persisted: Option<Roster> = read_record(storage.as_ref(), &settings.roster_key);
        let metadata: ReportMetadata =
            read_record(storage.as_ref(), &settings.metadata_key).unwrap_or_default();

        let (roster, fresh) = match persisted {
            Some(roster) if !roster.is_empty() => (roster, false),
            _ => (Roster::with_base_capacity(settings.base_capacity), true),
        };

        let store = Self { storage, settings, roster, metadata, revision: 0 };

        if fresh {
            info!(slots = store.roster.len(), "initialized fresh roster");
            if let Err(err) = store.persist_roster() {
                error!(error = %err, "failed to persist initial roster");
            }
        } else {
            let counts = store.roster.counts();
            info!(
                slots = store.roster.len(),
                active = counts.active,
                "loaded persisted roster"
            );
        }

        store
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    pub fn settings(&self) -> &RosterSettings {
        &self.settings
    }

    /// Number of accepted mutations since load
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn counts(&self) -> StatusCounts {
        self.roster.counts()
    }

    /// Flip slot `number` between active and inactive.
    ///
    /// # Errors
    /// Returns the storage error if persisting the roster fails.
    pub fn toggle_status(&mut self, number: SlotNumber) -> Result<MutationOutcome> {
        match self.roster.toggle(number) {
            Some(status) => {
                debug!(number, %status, "toggled slot");
                self.commit_roster()
            }
            None => {
                debug!(number, "toggle ignored: no such slot");
                Ok(MutationOutcome::Unchanged)
            }
        }
    }

    /// Put slot `number` into `status` regardless of its current one.
    ///
    /// # Errors
    /// Returns the storage error if persisting the roster fails.
    pub fn set_status(
        &mut self,
        number: SlotNumber,
        status: SlotStatus,
    ) -> Result<MutationOutcome> {
        if self.roster.set_status(number, status) {
            debug!(number, %status, "set slot status");
            self.commit_roster()
        } else {
            debug!(number, %status, "set_status ignored: no such slot or already set");
            Ok(MutationOutcome::Unchanged)
        }
    }

    /// Name slot `number`; an empty `name` clears it.
    ///
    /// # Errors
    /// Returns the storage error if persisting the roster fails.
    pub fn set_name(&mut self, number: SlotNumber, name: &str) -> Result<MutationOutcome> {
        if self.roster.set_name(number, name) {
            debug!(number, name, "renamed slot");
            self.commit_roster()
        } else {
            debug!(number, "set_name ignored: no such slot or same name");
            Ok(MutationOutcome::Unchanged)
        }
    }

    /// Append an active slot for `name` past the highest number in use and
    /// return the number it received.
    ///
    /// Empty names, names already on the roster (exact match) and rosters
    /// with no number left to hand out yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns the storage error if persisting the roster fails.
    pub fn add_by_name(&mut self, name: &str) -> Result<Option<SlotNumber>> {
        match self.roster.append_named(name) {
            Some(number) => {
                info!(number, name, "added named slot");
                self.commit_roster()?;
                Ok(Some(number))
            }
            None => {
                debug!(name, "add ignored: empty, duplicate or numbering exhausted");
                Ok(None)
            }
        }
    }

    /// Remove every slot named exactly `key`.
    ///
    /// # Errors
    /// Returns the storage error if persisting the roster fails.
    pub fn remove_by_name(&mut self, key: &str) -> Result<MutationOutcome> {
        let removed = self.roster.remove_named(key);
        if removed == 0 {
            debug!(name = key, "remove ignored: no matching slot");
            return Ok(MutationOutcome::Unchanged);
        }
        info!(name = key, removed, "removed named slots");
        self.commit_roster()
    }

    /// Merge `patch` into the report metadata and persist it on its own key.
    ///
    /// # Errors
    /// Returns the storage error if persisting the metadata fails.
    pub fn set_metadata(&mut self, patch: MetadataPatch) -> Result<MutationOutcome> {
        if patch.is_empty() || !patch.apply_to(&mut self.metadata) {
            return Ok(MutationOutcome::Unchanged);
        }
        self.revision += 1;
        debug!(revision = self.revision, "updated report metadata");
        write_record(self.storage.as_ref(), &self.settings.metadata_key, &self.metadata)?;
        Ok(MutationOutcome::Applied)
    }

    fn commit_roster(&mut self) -> Result<MutationOutcome> {
        self.revision += 1;
        self.persist_roster()?;
        Ok(MutationOutcome::Applied)
    }

    fn persist_roster(&self) -> Result<()> {
        write_record(self.storage.as_ref(), &self.settings.roster_key, &self.roster)
    }
}

fn read_record<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(key, error = %err, "failed to read record, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "corrupt record, using defaults");
            None
        }
    }
}

fn write_record<T: Serialize>(storage: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}
