use serde::{Deserialize, Serialize};

use super::components::{clamp, SalaryComponents};
use super::config::{IrsaSchedule, PayrollConfig};

/// Derived salary figures, never stored directly: recomputed from
/// scratch on every input change.
///
/// Invariants, in integer ariary:
/// - `net = gross - cnaps_employee - ostie_employee - irsa`
/// - `taxable_income = gross - cnaps_employee - ostie_employee`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub gross: i64,
    pub cnaps_employee: i64,
    pub ostie_employee: i64,
    pub taxable_income: i64,
    pub irsa: i64,
    pub total_deductions: i64,
    pub net: i64,

    /// `irsa / taxable_income`, 0 when there is no taxable income.
    pub effective_tax_rate: f64,

    // Employer side, informational only: shown on the payslip but never
    // subtracted from the employee's net.
    pub cnaps_employer: i64,
    pub ostie_employer: i64,
    pub employer_cost: i64,
}

/// Round a rate applied to an amount to the nearest integer ariary.
fn round_share(amount: i64, rate: f64) -> i64 {
    (amount as f64 * rate).round() as i64
}

/// Progressive IRSA on taxable income: standard marginal-bracket
/// accumulation, each band taxing only the slice of income that falls
/// within it.
///
/// Each band contribution is rounded on its own before summation (the
/// printed payslips were produced that way), and anyone above the
/// exoneration floor owes at least the schedule's minimum perception.
pub fn compute_irsa(schedule: &IrsaSchedule, taxable_income: i64) -> i64 {
    let income = clamp(taxable_income);

    let mut tax = 0i64;
    let mut floor = 0i64;
    for bracket in &schedule.brackets {
        if income <= floor {
            break;
        }
        let ceiling = bracket.ceiling.unwrap_or(i64::MAX);
        let slice = income.min(ceiling) - floor;
        tax += round_share(slice, bracket.rate);
        floor = ceiling;
    }

    if income > schedule.exoneration_floor() {
        tax.max(schedule.minimum_perception)
    } else {
        tax
    }
}

/// Gross-to-net salary computation.
pub fn compute_salary(config: &PayrollConfig, components: &SalaryComponents) -> SalaryBreakdown {
    let gross = components.gross();

    let cnaps_employee = round_share(gross, config.cnaps.employee_rate);
    let ostie_employee = round_share(gross, config.ostie.employee_rate);
    let taxable_income = gross - cnaps_employee - ostie_employee;

    let irsa = compute_irsa(&config.irsa, taxable_income);
    let total_deductions = cnaps_employee + ostie_employee + irsa;
    let net = gross - total_deductions;

    let effective_tax_rate = if taxable_income > 0 {
        irsa as f64 / taxable_income as f64
    } else {
        0.0
    };

    let cnaps_employer = round_share(gross, config.cnaps.employer_rate);
    let ostie_employer = round_share(gross, config.ostie.employer_rate);

    SalaryBreakdown {
        gross,
        cnaps_employee,
        ostie_employee,
        taxable_income,
        irsa,
        total_deductions,
        net,
        effective_tax_rate,
        cnaps_employer,
        ostie_employer,
        employer_cost: gross + cnaps_employer + ostie_employer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payroll::Allowances;

    fn config() -> PayrollConfig {
        PayrollConfig::default()
    }

    fn irsa(taxable: i64) -> i64 {
        compute_irsa(&config().irsa, taxable)
    }

    #[test]
    fn tax_is_zero_at_the_exoneration_floor() {
        assert_eq!(irsa(0), 0);
        assert_eq!(irsa(200_000), 0);
        assert_eq!(irsa(350_000), 0);
    }

    #[test]
    fn tax_is_positive_just_above_the_floor() {
        assert!(irsa(350_001) > 0);
    }

    #[test]
    fn bracket_worked_example() {
        // 450,000: band one fully consumed (50,000 at 5%), band two up to
        // 450,000 (50,000 at 10%).
        assert_eq!(irsa(450_000), 2_500 + 5_000);
    }

    #[test]
    fn top_band_applies_above_600_000() {
        // 2,500 + 10,000 + 15,000 + 20% of the slice above 600,000.
        assert_eq!(irsa(700_000), 2_500 + 10_000 + 15_000 + 20_000);
    }

    #[test]
    fn tax_is_monotonic_in_taxable_income() {
        let samples = [
            0, 100_000, 349_999, 350_000, 350_001, 360_000, 390_000, 400_000, 400_001, 450_000,
            500_000, 550_000, 600_000, 600_001, 800_000, 2_000_000,
        ];
        let mut previous = 0;
        for taxable in samples {
            let tax = irsa(taxable);
            assert!(
                tax >= previous,
                "tax decreased at {}: {} < {}",
                taxable,
                tax,
                previous
            );
            previous = tax;
        }
    }

    #[test]
    fn negative_taxable_income_owes_nothing() {
        assert_eq!(irsa(-50_000), 0);
    }

    #[test]
    fn net_invariant_holds_exactly() {
        let cases = [
            SalaryComponents::new(400_000, Allowances::default()),
            SalaryComponents::new(
                800_000,
                Allowances {
                    transport: 60_000,
                    housing: 120_000,
                    meal: 40_000,
                    performance: 0,
                    other: 15_000,
                },
            ),
            SalaryComponents::new(2_500_000, Allowances::default()),
        ];
        for components in cases {
            let result = compute_salary(&config(), &components);
            assert_eq!(
                result.net,
                result.gross - result.cnaps_employee - result.ostie_employee - result.irsa
            );
            assert_eq!(
                result.taxable_income,
                result.gross - result.cnaps_employee - result.ostie_employee
            );
            assert_eq!(
                result.total_deductions,
                result.cnaps_employee + result.ostie_employee + result.irsa
            );
        }
    }

    #[test]
    fn contributions_use_employee_rates() {
        let result = compute_salary(&config(), &SalaryComponents::new(1_000_000, Allowances::default()));
        assert_eq!(result.gross, 1_000_000);
        assert_eq!(result.cnaps_employee, 10_000);
        assert_eq!(result.ostie_employee, 10_000);
        assert_eq!(result.taxable_income, 980_000);
    }

    #[test]
    fn employer_cost_excluded_from_net() {
        let result = compute_salary(&config(), &SalaryComponents::new(1_000_000, Allowances::default()));
        assert_eq!(result.cnaps_employer, 130_000);
        assert_eq!(result.ostie_employer, 50_000);
        assert_eq!(result.employer_cost, 1_180_000);
        // Employer contributions never touch the employee side.
        assert_eq!(
            result.net,
            result.gross - result.total_deductions
        );
    }

    #[test]
    fn effective_rate_never_divides_by_zero() {
        let result = compute_salary(&config(), &SalaryComponents::default());
        assert_eq!(result.effective_tax_rate, 0.0);

        let taxed = compute_salary(&config(), &SalaryComponents::new(1_000_000, Allowances::default()));
        assert!(taxed.effective_tax_rate > 0.0);
        assert!((taxed.effective_tax_rate - taxed.irsa as f64 / taxed.taxable_income as f64).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_input_yields_zero_valued_output() {
        let result = compute_salary(&config(), &SalaryComponents::default());
        assert_eq!(result.gross, 0);
        assert_eq!(result.net, 0);
        assert_eq!(result.irsa, 0);
        assert_eq!(result.employer_cost, 0);
    }
}
