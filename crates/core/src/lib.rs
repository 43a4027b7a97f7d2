//! # BoardCount Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The roster state engine (`RosterStore`) and its derived views
//! - The print paginator and report assembly
//! - The free-text command interpreter
//! - Port/adapter interfaces (traits) for storage and transcription
//!
//! ## Architecture Principles
//! - Only depends on `boardcount-domain`
//! - No database, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod command;
pub mod report;
pub mod roster;

// Infrastructure ports
pub mod storage_ports;

// Re-export specific items to avoid ambiguity
pub use command::ports::TranscriptionService;
pub use command::{Command, CommandInterpreter, CommandReport, ParsedCommand};
pub use report::{paginate, PageCapacity, Page, Report, ReportHeader, ReportLayout, RowPair};
pub use roster::view;
pub use roster::{MutationOutcome, RosterSettings, RosterStore};
pub use storage_ports::KeyValueStore;
