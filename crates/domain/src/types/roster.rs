//! Roster collection
//!
//! The roster is an ordered list of slots whose numbers are unique. The
//! mutation helpers here keep that invariant; persistence and logging are the
//! caller's concern.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::slot::{FilterMode, Slot, SlotNumber, SlotStatus};
use crate::{BoardCountError, Result};

/// Ordered collection of slots with unique numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slot>", into = "Vec<Slot>")]
pub struct Roster {
    slots: Vec<Slot>,
}

/// Active/inactive tally over a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.active + self.inactive
    }
}

impl Roster {
    /// Fresh roster of `capacity` vacant slots numbered `1..=capacity`
    pub fn with_base_capacity(capacity: u32) -> Self {
        Self { slots: (1..=capacity).map(Slot::vacant).collect() }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, number: SlotNumber) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.number == number)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot.has_name(name))
    }

    /// Number the next appended slot receives: one past the highest in use.
    /// `None` once the highest number is `SlotNumber::MAX`.
    pub fn next_number(&self) -> Option<SlotNumber> {
        self.slots.iter().map(|slot| slot.number).max().map_or(Some(1), |max| max.checked_add(1))
    }

    /// Slots matching `mode`, in roster order
    pub fn filter(&self, mode: FilterMode) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().filter(move |slot| mode.matches(slot.status))
    }

    pub fn counts(&self) -> StatusCounts {
        self.slots.iter().fold(StatusCounts::default(), |mut counts, slot| {
            match slot.status {
                SlotStatus::Active => counts.active += 1,
                SlotStatus::Inactive => counts.inactive += 1,
            }
            counts
        })
    }

    /// Flip the status of slot `number`. Returns the new status, or `None`
    /// when no slot has that number.
    pub fn toggle(&mut self, number: SlotNumber) -> Option<SlotStatus> {
        let slot = self.get_mut(number)?;
        slot.status = slot.status.toggled();
        Some(slot.status)
    }

    /// Force slot `number` into `status`. Returns `true` when it changed.
    pub fn set_status(&mut self, number: SlotNumber, status: SlotStatus) -> bool {
        match self.get_mut(number) {
            Some(slot) if slot.status != status => {
                slot.status = status;
                true
            }
            _ => false,
        }
    }

    /// Set (or clear, with an empty string) the name of slot `number`.
    /// Returns `true` when it changed.
    pub fn set_name(&mut self, number: SlotNumber, name: &str) -> bool {
        let name = (!name.is_empty()).then(|| name.to_string());
        match self.get_mut(number) {
            Some(slot) if slot.name != name => {
                slot.name = name;
                true
            }
            _ => false,
        }
    }

    /// Append an active slot named `name`. Rejects empty and duplicate names,
    /// and rosters whose numbering is exhausted.
    pub fn append_named(&mut self, name: &str) -> Option<SlotNumber> {
        if name.is_empty() || self.contains_name(name) {
            return None;
        }
        let number = self.next_number()?;
        self.slots.push(Slot::named(number, name));
        Some(number)
    }

    /// Drop every slot named exactly `name`. Returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        if name.is_empty() {
            return 0;
        }
        let before = self.slots.len();
        self.slots.retain(|slot| !slot.has_name(name));
        before - self.slots.len()
    }

    fn get_mut(&mut self, number: SlotNumber) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.number == number)
    }
}

impl TryFrom<Vec<Slot>> for Roster {
    type Error = BoardCountError;

    fn try_from(slots: Vec<Slot>) -> Result<Self> {
        if slots.iter().any(|slot| slot.number == 0) {
            return Err(BoardCountError::InvalidInput("slot number 0 in roster".into()));
        }
        let mut seen = HashSet::with_capacity(slots.len());
        if let Some(dup) = slots.iter().find(|slot| !seen.insert(slot.number)) {
            return Err(BoardCountError::InvalidInput(format!(
                "duplicate slot number {} in roster",
                dup.number
            )));
        }
        Ok(Self { slots })
    }
}

impl From<Roster> for Vec<Slot> {
    fn from(roster: Roster) -> Self {
        roster.slots
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
