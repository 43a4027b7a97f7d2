//! Single-file JSON key-value store
//!
//! The file holds one JSON object mapping keys to string values. The whole
//! object is rewritten on every `set` through a temporary file in the same
//! directory that is then renamed over the original, so a crash mid-write
//! leaves the previous contents intact.
//!
//! A file that exists but does not parse is moved aside to
//! `<path>.corrupt` and the store starts empty.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use boardcount_core::KeyValueStore;
use boardcount_domain::{BoardCountError, Result};
use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Key-value store persisted as one JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open `path`, reading existing contents if the file exists.
    ///
    /// # Errors
    /// Returns a storage error if the file exists but cannot be read, or if a
    /// corrupt file cannot be moved aside.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() { read_document(&path)? } else { BTreeMap::new() };
        debug!(path = %path.display(), keys = values.len(), "opened json store");
        Ok(Self { path, values: Mutex::new(values) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_error)?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(io_error)?;
        serde_json::to_writer_pretty(&mut temp, values)
            .map_err(|e| BoardCountError::from(InfraError::from(e)))?;
        temp.flush().map_err(io_error)?;
        temp.as_file().sync_all().map_err(io_error)?;
        temp.persist(&self.path).map_err(|e| io_error(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock();
        let previous = values.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.write_document(&values) {
            // keep the cache in step with what is on disk
            match previous {
                Some(old) => values.insert(key.to_owned(), old),
                None => values.remove(key),
            };
            return Err(err);
        }
        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = fs::read_to_string(path).map_err(io_error)?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    match serde_json::from_str(&contents) {
        Ok(values) => Ok(values),
        Err(err) => {
            let mut aside = path.as_os_str().to_owned();
            aside.push(".corrupt");
            warn!(
                path = %path.display(),
                error = %err,
                "corrupt json store moved aside, starting empty"
            );
            fs::rename(path, PathBuf::from(aside)).map_err(io_error)?;
            Ok(BTreeMap::new())
        }
    }
}

fn io_error(err: std::io::Error) -> BoardCountError {
    InfraError::from(err).into()
}
