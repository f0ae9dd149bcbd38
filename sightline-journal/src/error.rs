//! Error types for sightline-journal

use sightline_core::Error as CoreError;
use thiserror::Error;

/// Remote store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request error: {0}")]
    Request(String),

    #[error("Store rejected write: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Store(err.to_string())
    }
}
