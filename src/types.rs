//! Shared identifiers and ledger record types.

use serde::{Deserialize, Serialize};

/// Store-assigned, monotonically increasing record identifier.
pub type RecordId = u64;

/// Values handed to the ledger before an identifier exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionDraft {
    /// Factor table category, e.g. `transport`.
    pub category: String,
    /// Activity within the category, e.g. `Car`.
    pub activity: String,
    /// User-supplied quantity in the activity's unit.
    pub amount: f64,
    /// Computed emission in kg CO2.
    pub emission: f64,
}

impl EmissionDraft {
    /// Builds a draft from borrowed names.
    pub fn new(category: &str, activity: &str, amount: f64, emission: f64) -> Self {
        Self {
            category: category.to_string(),
            activity: activity.to_string(),
            amount,
            emission,
        }
    }
}

/// Persisted, immutable emission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Factor table category.
    pub category: String,
    /// Activity within the category.
    pub activity: String,
    /// User-supplied quantity.
    pub amount: f64,
    /// `amount * factor` at creation time.
    pub emission: f64,
}

impl EmissionRecord {
    /// Materializes a draft under `id`.
    pub fn from_draft(id: RecordId, draft: EmissionDraft) -> Self {
        Self {
            id,
            category: draft.category,
            activity: draft.activity,
            amount: draft.amount,
            emission: draft.emission,
        }
    }
}

/// Summed emission for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of `emission` over the category's records.
    pub total: f64,
}
