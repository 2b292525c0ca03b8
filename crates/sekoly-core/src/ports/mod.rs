//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, keeping the domain independent of any concrete
//! document store. The sync service is written against
//! [`CollectionStorePort`] alone; any compliant adapter plugs in without
//! runtime type inspection.

mod collection_store;
pub mod errors;
mod tuition_config;

pub use collection_store::{CollectionStorePort, CollectionWatch, WatchEvent, WatchGuard};
pub use errors::StoreError;
pub use tuition_config::TuitionConfigPort;
