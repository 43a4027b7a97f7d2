//! Report metadata
//!
//! Free-form header fields typed in by the hall manager. Persisted separately
//! from the roster.

use serde::{Deserialize, Serialize};

/// Editable report header fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportMetadata {
    #[serde(alias = "tarikh")]
    pub date: String,
    #[serde(alias = "manager")]
    pub manager_name: String,
    #[serde(alias = "netMeal")]
    pub net_meal_count: String,
    #[serde(alias = "bazarKari")]
    pub market_budget: String,
}

/// Partial update to [`ReportMetadata`]; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPatch {
    pub date: Option<String>,
    pub manager_name: Option<String>,
    pub net_meal_count: Option<String>,
    pub market_budget: Option<String>,
}

impl MetadataPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.manager_name.is_none()
            && self.net_meal_count.is_none()
            && self.market_budget.is_none()
    }

    /// Merge into `metadata`. Returns `true` if any field changed.
    pub fn apply_to(self, metadata: &mut ReportMetadata) -> bool {
        let mut changed = false;
        for (value, field) in [
            (self.date, &mut metadata.date),
            (self.manager_name, &mut metadata.manager_name),
            (self.net_meal_count, &mut metadata.net_meal_count),
            (self.market_budget, &mut metadata.market_budget),
        ] {
            if let Some(value) = value {
                if *field != value {
                    *field = value;
                    changed = true;
                }
            }
        }
        changed
    }
}
