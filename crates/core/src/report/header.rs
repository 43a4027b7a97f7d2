//! Report header and assembly
//!
//! The printed report opens with the date, the manager's free-form fields and
//! the net meal figure, followed by the paginated roster.

use boardcount_domain::constants::NET_MEAL_OFFSET;
use boardcount_domain::{Config, ReportMetadata, Result, Roster, StatusCounts};
use serde::Serialize;

use super::paginator::{paginate, Page, PageCapacity};

/// Net meal figure printed in the header: active boarders plus `offset`
pub fn net_meal(counts: StatusCounts, offset: usize) -> usize {
    counts.active + offset
}

/// Shape of the printed report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    pub page_capacity: PageCapacity,
    pub net_meal_offset: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self { page_capacity: PageCapacity::default(), net_meal_offset: NET_MEAL_OFFSET }
    }
}

impl ReportLayout {
    /// # Errors
    /// Returns `BoardCountError::InvalidInput` if the configured page
    /// capacity is zero or odd.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            page_capacity: PageCapacity::new(config.roster.page_capacity)?,
            net_meal_offset: config.roster.net_meal_offset,
        })
    }
}

/// Values printed above the roster table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeader {
    /// Already formatted by the caller
    pub date: String,
    pub metadata: ReportMetadata,
    pub active: usize,
    pub net_meal: usize,
}

/// Header plus paginated roster, ready for a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub header: ReportHeader,
    pub pages: Vec<Page<'a>>,
}

impl<'a> Report<'a> {
    pub fn build(
        roster: &'a Roster,
        metadata: &ReportMetadata,
        date: impl Into<String>,
        layout: ReportLayout,
    ) -> Self {
        let counts = roster.counts();
        Self {
            header: ReportHeader {
                date: date.into(),
                metadata: metadata.clone(),
                active: counts.active,
                net_meal: net_meal(counts, layout.net_meal_offset),
            },
            pages: paginate(roster, layout.page_capacity),
        }
    }
}
