//! Key-value storage port.
//!
//! The roster engine persists two records, the roster and the report
//! metadata, each as one serialized string under its own key. Any medium that
//! can get and set strings by key synchronously can back it: SQLite, a JSON
//! file, or plain memory in tests.
//!
//! # Example
//!
//! ```no_run
//! use boardcount_core::KeyValueStore;
//!
//! fn has_saved_roster(store: &dyn KeyValueStore) -> bool {
//!     matches!(store.get("roster"), Ok(Some(_)))
//! }
//! ```

use boardcount_domain::Result;

/// Port for a durable, synchronous string key-value medium.
///
/// `set` overwrites the whole value; there are no partial updates. A value
/// written by `set` must be returned verbatim by the next `get` of the same
/// key, including after a process restart for durable adapters.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
