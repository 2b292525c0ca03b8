//! Realtime collection synchronization.

mod service;

pub use service::CollectionSyncService;
