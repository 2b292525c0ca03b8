//! Écolage (tuition fee) domain.
//!
//! Per-class fee structure: monthly amount (annual is always ten months
//! of it), registration fee and exam fee, with a provenance tag telling
//! whether the figures come from an explicitly persisted configuration
//! or from the static default table.

pub mod defaults;
mod model;

pub use defaults::{
    default_amounts_for, default_monthly_for, DEFAULT_EXAM_FEE, DEFAULT_MONTHLY_AMOUNT,
    DEFAULT_REGISTRATION_FEE,
};
pub use model::{FeeSource, TuitionAmounts, TuitionConfigRecord};
