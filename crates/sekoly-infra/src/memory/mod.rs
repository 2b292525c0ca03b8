//! In-memory store adapters.

mod collection_store;
mod tuition_repo;

pub use collection_store::{InMemoryCollectionStore, StoreFault};
pub use tuition_repo::InMemoryTuitionConfigs;
