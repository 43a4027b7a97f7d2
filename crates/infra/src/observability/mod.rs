//! Logging setup for binaries
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary, once, at startup.

pub mod logging;

pub use logging::{init_logging, LogFormat};
