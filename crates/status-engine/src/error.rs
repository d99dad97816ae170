//! Error types for status-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    #[error("Invalid event collection: {0}")]
    InvalidCollection(String),

    #[error("Unsupported booking duration: {0} minutes")]
    UnsupportedDuration(u32),
}

pub type Result<T> = std::result::Result<T, StatusError>;
