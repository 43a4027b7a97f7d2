//! Derived roster views
//!
//! Stateless functions over a roster snapshot. They never mutate and never
//! touch storage.

use boardcount_domain::{FilterMode, Roster, Slot, StatusCounts};

/// Slots matching `mode`, preserving roster order
pub fn filter(roster: &Roster, mode: FilterMode) -> Vec<&Slot> {
    roster.filter(mode).collect()
}

/// Active/inactive tally; `active + inactive == roster.len()` always holds
pub fn counts(roster: &Roster) -> StatusCounts {
    roster.counts()
}
