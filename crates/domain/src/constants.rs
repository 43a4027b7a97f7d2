//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Roster shape
pub const BASE_CAPACITY: u32 = 160;
pub const PAGE_CAPACITY: usize = 52;

// Report header: net meal = active boarders + fixed guest allowance
pub const NET_MEAL_OFFSET: usize = 5;

// Persistence keys
pub const ROSTER_KEY: &str = "roster";
pub const METADATA_KEY: &str = "report_metadata";

// Storage defaults
pub const DEFAULT_DB_PATH: &str = "boardcount.db";
pub const DEFAULT_POOL_SIZE: u32 = 2;
