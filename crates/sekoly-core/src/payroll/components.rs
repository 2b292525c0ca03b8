use serde::{Deserialize, Serialize};

/// Monthly allowances by category, in ariary.
///
/// The categories are a closed, known set, so they are named fields
/// rather than an open-ended map. Every field is zero-defaulted; a
/// missing field on the wire reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowances {
    pub transport: i64,
    pub housing: i64,
    pub meal: i64,
    pub performance: i64,
    pub other: i64,
}

impl Allowances {
    /// Sum of all categories, negatives clamped to 0.
    pub fn total(&self) -> i64 {
        clamp(self.transport)
            + clamp(self.housing)
            + clamp(self.meal)
            + clamp(self.performance)
            + clamp(self.other)
    }
}

/// Base salary plus allowances, in ariary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    pub base: i64,

    #[serde(default)]
    pub allowances: Allowances,
}

impl SalaryComponents {
    pub fn new(base: i64, allowances: Allowances) -> Self {
        Self { base, allowances }
    }

    /// Gross salary: base plus every allowance. Negative money values
    /// never propagate.
    pub fn gross(&self) -> i64 {
        clamp(self.base) + self.allowances.total()
    }
}

/// Monetary inputs are pre-validated upstream; whatever slips through is
/// clamped rather than rejected.
pub(crate) fn clamp(amount: i64) -> i64 {
    amount.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gross_decomposes_into_base_plus_allowances() {
        let components = SalaryComponents::new(
            800_000,
            Allowances {
                transport: 50_000,
                housing: 100_000,
                meal: 30_000,
                performance: 20_000,
                other: 10_000,
            },
        );
        assert_eq!(
            components.gross(),
            800_000 + 50_000 + 100_000 + 30_000 + 20_000 + 10_000
        );
    }

    #[test]
    fn missing_allowances_read_as_zero() {
        let components: SalaryComponents =
            serde_json::from_str(r#"{"base": 500000}"#).expect("deserialize");
        assert_eq!(components.gross(), 500_000);
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        let components = SalaryComponents::new(
            -200_000,
            Allowances {
                transport: -5_000,
                ..Allowances::default()
            },
        );
        assert_eq!(components.gross(), 0);
    }
}
