//! Slot types
//!
//! A slot is one numbered boarder position in the roster.

use serde::{Deserialize, Deserializer, Serialize};

use crate::impl_domain_status_conversions;

/// Slot number (1-based, unique within a roster)
pub type SlotNumber = u32;

/// Whether a boarder is currently eating in the hall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Active,
    #[default]
    Inactive,
}

impl_domain_status_conversions!(SlotStatus {
    Active => "active",
    Inactive => "inactive",
});

impl SlotStatus {
    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Which slots a roster view should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Inactive,
}

impl_domain_status_conversions!(FilterMode {
    All => "all",
    Active => "active",
    Inactive => "inactive",
});

impl FilterMode {
    /// Whether a slot with `status` belongs in this view
    pub fn matches(self, status: SlotStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == SlotStatus::Active,
            Self::Inactive => status == SlotStatus::Inactive,
        }
    }
}

/// One numbered roster position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub number: SlotNumber,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub status: SlotStatus,
}

impl Slot {
    /// Unnamed, inactive slot
    pub fn vacant(number: SlotNumber) -> Self {
        Self { number, name: None, status: SlotStatus::Inactive }
    }

    /// Named slot appended past the base capacity; starts active
    pub fn named(number: SlotNumber, name: impl Into<String>) -> Self {
        Self { number, name: Some(name.into()), status: SlotStatus::Active }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Exact, case-sensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Text printed for this slot: the name when set, otherwise the number
    pub fn label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.number.to_string(),
        }
    }
}

/// Older roster snapshots store an unnamed slot as `""` rather than `null`.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|name| !name.is_empty()))
}
