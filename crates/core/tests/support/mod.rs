//! Shared test helpers for `boardcount-core` integration tests.
//!
//! In-memory adapters for the core ports so tests can drive the roster store
//! and interpreter without touching disk.

#![allow(dead_code)]

pub mod stores;

use std::sync::Arc;

use boardcount_core::{RosterSettings, RosterStore};
pub use stores::{MemoryStore, ScriptedTranscriber};

/// Fresh 160-slot store over an empty in-memory backend
pub fn fresh_store() -> (Arc<MemoryStore>, RosterStore) {
    let backing = Arc::new(MemoryStore::default());
    let store = RosterStore::load(backing.clone(), RosterSettings::default());
    (backing, store)
}

/// Reload a store from the same backend, as a restart would
pub fn reload(backing: &Arc<MemoryStore>) -> RosterStore {
    RosterStore::load(backing.clone(), RosterSettings::default())
}
