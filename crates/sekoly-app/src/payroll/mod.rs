//! Payslip use cases.

mod prepare_payslip;

pub use prepare_payslip::{Payslip, PreparePayslip, PreparePayslipError};
