//! Roster state: the owning store and its pure derived views

pub mod service;
pub mod view;

pub use service::{MutationOutcome, RosterSettings, RosterStore};
