use serde::{Deserialize, Serialize};

/// Where a suggested fee came from. Preserved through the resolver and
/// surfaced to the caller so forms can tell a configured amount from a
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeSource {
    /// Explicitly set and persisted for this class.
    Configured,
    /// Computed from the static class-name lookup table.
    Default,
}

/// Resolved fee suggestion for one class, in ariary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionAmounts {
    pub monthly_amount: i64,
    pub registration_fee: i64,
    pub exam_fee: i64,
    pub source: FeeSource,
}

impl TuitionAmounts {
    /// Ten-month school year. Fixed invariant, not configurable per
    /// class.
    pub fn annual_amount(&self) -> i64 {
        self.monthly_amount * 10
    }
}

/// Persisted per-class fee configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionConfigRecord {
    pub class_name: String,
    pub monthly_amount: i64,
    pub registration_fee: Option<i64>,
    pub exam_fee: Option<i64>,
    pub active: bool,

    #[serde(default)]
    pub notes: String,
}
