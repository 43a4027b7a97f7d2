//! Mock port implementations for testing

use std::collections::{HashMap, VecDeque};

use boardcount_core::{KeyValueStore, TranscriptionService};
use boardcount_domain::{BoardCountError, Result as DomainResult};
use parking_lot::Mutex;

/// In-memory `KeyValueStore` that records every write.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<String>>,
    fail_writes: Mutex<bool>,
}

impl MemoryStore {
    /// Backend pre-seeded with raw values (e.g. corrupt JSON).
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        store.values.lock().extend(entries.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        store
    }

    /// Keys written so far, in order.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    /// Make subsequent writes fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        if *self.fail_writes.lock() {
            return Err(BoardCountError::Storage(format!("write to '{key}' rejected")));
        }
        self.writes.lock().push(key.to_string());
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `TranscriptionService` that replays a fixed list of transcripts.
#[derive(Default)]
pub struct ScriptedTranscriber {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedTranscriber {
    pub fn new(lines: &[&str]) -> Self {
        Self { lines: Mutex::new(lines.iter().map(|line| line.to_string()).collect()) }
    }
}

impl TranscriptionService for ScriptedTranscriber {
    fn transcribe(&self) -> DomainResult<Option<String>> {
        Ok(self.lines.lock().pop_front())
    }
}
