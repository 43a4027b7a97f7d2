//! Line-based transcript source
//!
//! Stands in for a speech recognizer: each input line is one utterance.

use std::io::{BufRead, BufReader};

use boardcount_core::TranscriptionService;
use boardcount_domain::{BoardCountError, Result};
use parking_lot::Mutex;

/// Reads one transcript per line until end of input.
pub struct LineTranscriber {
    reader: Mutex<Box<dyn BufRead + Send>>,
}

impl LineTranscriber {
    pub fn new(reader: impl BufRead + Send + 'static) -> Self {
        Self { reader: Mutex::new(Box::new(reader)) }
    }

    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl TranscriptionService for LineTranscriber {
    fn transcribe(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .read_line(&mut line)
            .map_err(|e| BoardCountError::Internal(format!("failed to read input: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
