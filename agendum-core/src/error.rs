//! Error types for agendum.

use thiserror::Error;

use crate::date_key::DateKey;

/// Errors that can occur in agendum operations.
#[derive(Error, Debug)]
pub enum AgendumError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No event with id {id} on {date}")]
    EventNotFound { date: DateKey, id: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agendum operations.
pub type AgendumResult<T> = Result<T, AgendumError>;
