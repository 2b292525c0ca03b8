//! Collection synchronization domain.
//!
//! A "collection" is a named set of flat documents held by a remote
//! document store and mirrored into the UI through push snapshots. The
//! types here are pure: state transitions live in [`CollectionState`],
//! runtime behavior (subscriptions, retries) lives in the application
//! layer.

mod document;
mod issue;
mod state;

pub use document::{CollectionSnapshot, Document};
pub use issue::SyncIssue;
pub use state::{CollectionState, MutationKind, PendingOps};
