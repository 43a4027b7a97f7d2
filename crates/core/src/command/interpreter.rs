//! Command interpreter - applies parsed commands to the roster store

use boardcount_domain::{ActivationPolicy, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::parser::{parse, Command, ParsedCommand};
use super::ports::TranscriptionService;
use crate::roster::RosterStore;

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReport {
    pub command: Command,
    /// Mutations that changed the roster
    pub applied: usize,
    /// Operand tokens that were not slot numbers
    pub skipped: Vec<String>,
}

/// Maps free-text commands onto roster mutations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandInterpreter {
    policy: ActivationPolicy,
}

impl CommandInterpreter {
    pub fn new(policy: ActivationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    /// Parse and apply one command line.
    ///
    /// Unknown keywords, bad operands and unmatched targets are no-ops.
    ///
    /// # Errors
    /// Only storage failures while persisting a mutation are returned;
    /// remaining operands of that command are not applied.
    pub fn execute(&self, store: &mut RosterStore, input: &str) -> Result<CommandReport> {
        let ParsedCommand { command, skipped } = parse(input);
        let mut applied = 0;

        match &command {
            Command::Status { keyword, numbers } => {
                for &number in numbers {
                    let outcome = match self.policy {
                        ActivationPolicy::Toggle => store.toggle_status(number)?,
                        ActivationPolicy::Force => store.set_status(number, *keyword)?,
                    };
                    applied += usize::from(outcome.is_applied());
                }
            }
            Command::Add { name } => {
                applied += usize::from(store.add_by_name(name)?.is_some());
            }
            Command::Remove { name } => {
                applied += usize::from(store.remove_by_name(name)?.is_applied());
            }
            Command::Ignored { keyword } => {
                debug!(keyword = %keyword, "ignoring unrecognized command");
            }
        }

        if !skipped.is_empty() {
            debug!(?skipped, "skipped non-numeric operands");
        }
        info!(input, applied, revision = store.revision(), "command executed");

        Ok(CommandReport { command, applied, skipped })
    }

    /// Take one transcript from `transcriber` and apply it.
    ///
    /// The whole transcript is lowercased first, matching what speech
    /// recognition hands back. Returns `None` when nothing was heard.
    ///
    /// # Errors
    /// Propagates transcription failures and storage failures.
    pub fn listen(
        &self,
        store: &mut RosterStore,
        transcriber: &dyn TranscriptionService,
    ) -> Result<Option<CommandReport>> {
        let Some(transcript) = transcriber.transcribe()? else {
            debug!("no transcript received");
            return Ok(None);
        };
        let transcript = transcript.to_lowercase();
        self.execute(store, &transcript).map(Some)
    }
}
