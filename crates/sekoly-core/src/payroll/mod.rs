//! Payroll calculation engine.
//!
//! Pure, stateless arithmetic: gross-to-net salary computation with the
//! CNAPS/OSTIE social contributions and the progressive IRSA income
//! tax. Everything here is recomputed from scratch on every call and
//! never raises; out-of-range inputs are clamped to safe zeros.
//!
//! The rates and brackets are immutable configuration data passed into
//! the functions, never module-level mutable state, so another
//! jurisdiction's rules can be swapped in without touching the
//! calculation logic.

mod components;
mod compute;
mod config;
mod defaults;
mod words;

pub use components::{Allowances, SalaryComponents};
pub use compute::{compute_irsa, compute_salary, SalaryBreakdown};
pub use config::{ContributionScheme, IrsaSchedule, PayrollConfig, TaxBracket};
pub use words::amount_in_words;
