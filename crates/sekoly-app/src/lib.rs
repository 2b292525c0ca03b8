//! Sekoly Application Orchestration Layer
//!
//! This crate contains the use cases and runtime orchestration: the
//! realtime collection synchronization service plus the payslip and
//! tuition-suggestion use cases. All of it is written against the port
//! traits in `sekoly-core`; no concrete store appears here.

pub mod payroll;
pub mod sync;
pub mod tuition;

pub use payroll::{Payslip, PreparePayslip};
pub use sync::CollectionSyncService;
pub use tuition::SuggestTuitionAmount;
