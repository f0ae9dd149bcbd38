//! sightline-core: shared types for the Sightline assistive-vision pipeline
//!
//! Holds the workspace-wide error type and the small set of domain types
//! that cross crate boundaries: describe modes, detections, and journal
//! entries. Everything heavier lives in the adapter crates.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DescribeMode, Detection, JournalEntry, UnknownMode};
