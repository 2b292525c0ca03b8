//! # sekoly-core
//!
//! Core domain models and business logic for Sekoly, a school
//! administration system (students, employees, classes, écolage).
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the collection synchronization state machine, the store
//! port contracts, the payroll/IRSA calculation engine and the tuition
//! fee tables.

// Public module exports
pub mod collection;
pub mod ids;
pub mod payroll;
pub mod ports;
pub mod school;
pub mod tuition;

// Re-export commonly used types at the crate root
pub use collection::{CollectionSnapshot, CollectionState, Document, MutationKind, SyncIssue};
pub use ids::DocumentId;
pub use payroll::{compute_salary, PayrollConfig, SalaryBreakdown, SalaryComponents};
pub use ports::{CollectionStorePort, StoreError, TuitionConfigPort};
pub use tuition::{FeeSource, TuitionAmounts, TuitionConfigRecord};
