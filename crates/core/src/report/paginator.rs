//! Print paginator
//!
//! Active slots are cut into pages of `capacity` entries. Each page prints as
//! a two-column table of `capacity / 2` rows: the first half of the page runs
//! down the left column, the second half down the right. Every page carries
//! the full row count so printed pages line up, with absent cells left blank.

use boardcount_domain::constants::PAGE_CAPACITY;
use boardcount_domain::{BoardCountError, FilterMode, Result, Roster, Slot};
use serde::Serialize;

/// Number of slots per printed page; always even and non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageCapacity(usize);

impl PageCapacity {
    /// # Errors
    /// Returns `BoardCountError::InvalidInput` for zero or odd capacities.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity % 2 != 0 {
            return Err(BoardCountError::InvalidInput(format!(
                "page capacity must be a positive even number, got {capacity}"
            )));
        }
        Ok(Self(capacity))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Row-pairs per page
    pub fn rows(self) -> usize {
        self.0 / 2
    }
}

impl Default for PageCapacity {
    fn default() -> Self {
        Self(PAGE_CAPACITY)
    }
}

/// One printed row: a left and a right cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowPair<'a> {
    pub left: Option<&'a Slot>,
    pub right: Option<&'a Slot>,
}

/// One printed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,
    pub rows: Vec<RowPair<'a>>,
}

impl Page<'_> {
    /// Slots printed on this page
    pub fn len(&self) -> usize {
        self.rows
            .iter()
            .map(|row| usize::from(row.left.is_some()) + usize::from(row.right.is_some()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lay out the active slots of `roster` into print pages.
///
/// Produces `ceil(active / capacity)` pages; no active slots means no pages.
pub fn paginate(roster: &Roster, capacity: PageCapacity) -> Vec<Page<'_>> {
    let active: Vec<&Slot> = roster.filter(FilterMode::Active).collect();
    let half = capacity.rows();

    active
        .chunks(capacity.get())
        .enumerate()
        .map(|(index, chunk)| Page {
            number: index + 1,
            rows: (0..half)
                .map(|row| RowPair {
                    left: chunk.get(row).copied(),
                    right: chunk.get(row + half).copied(),
                })
                .collect(),
        })
        .collect()
}
