//! sightline-journal: activity log for the Sightline pipeline
//!
//! Two halves with independent clocks: an in-process append-only journal
//! serving the "last N entries" display view, and a `DocumentStore` seam
//! for mirroring entries to a remote document collection that stamps its
//! own server-side timestamp on each write.

pub mod activity;
pub mod config;
pub mod error;
pub mod store;

pub use activity::ActivityJournal;
pub use config::{RetryConfig, StoreConfig, STORE_TOKEN_ENV};
pub use error::StoreError;
pub use store::{DocumentStore, HttpDocumentStore, MemoryDocumentStore};
