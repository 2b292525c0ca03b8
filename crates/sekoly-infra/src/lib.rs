//! Infrastructure adapters for Sekoly.
//!
//! The remote document store itself is an external collaborator; what
//! lives here is the in-memory adapter that implements the same port
//! contracts, used by the integration tests and local development.

pub mod memory;

pub use memory::{InMemoryCollectionStore, InMemoryTuitionConfigs, StoreFault};
