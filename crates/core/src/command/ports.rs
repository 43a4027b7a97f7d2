//! Port interfaces for command input

use boardcount_domain::Result;

/// Trait for a speech-to-text (or typed) command source
///
/// Each call waits for one utterance and returns its transcript. `None`
/// means nothing was heard (silence, cancelled prompt, end of input).
pub trait TranscriptionService: Send + Sync {
    /// Capture a single transcript
    fn transcribe(&self) -> Result<Option<String>>;
}
