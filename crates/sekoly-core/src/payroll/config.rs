use serde::{Deserialize, Serialize};

/// One social-contribution scheme, with both sides of the rate.
///
/// Only the employee side enters the net calculation; the employer side
/// is computed for informational display (employer cost) and never
/// subtracted from the employee's net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionScheme {
    pub name: String,
    pub employee_rate: f64,
    pub employer_rate: f64,
}

/// One marginal band of the IRSA schedule.
///
/// `ceiling` is the inclusive upper bound of taxable income covered by
/// this band; `None` marks the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub ceiling: Option<i64>,
    pub rate: f64,
}

/// Progressive IRSA schedule: strictly increasing marginal bands plus a
/// minimum perception owed by anyone above the exoneration floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrsaSchedule {
    pub brackets: Vec<TaxBracket>,
    pub minimum_perception: i64,
}

impl IrsaSchedule {
    /// Income at or below this owes no tax at all. By construction this
    /// is the ceiling of the leading zero-rate band.
    pub fn exoneration_floor(&self) -> i64 {
        self.brackets
            .iter()
            .take_while(|bracket| bracket.rate == 0.0)
            .filter_map(|bracket| bracket.ceiling)
            .last()
            .unwrap_or(0)
    }
}

/// Complete payroll rule set for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfig {
    pub cnaps: ContributionScheme,
    pub ostie: ContributionScheme,
    pub irsa: IrsaSchedule,
}
