//! Domain types and models

pub mod report;
pub mod roster;
pub mod slot;

pub use report::{MetadataPatch, ReportMetadata};
pub use roster::{Roster, StatusCounts};
pub use slot::{FilterMode, Slot, SlotNumber, SlotStatus};
