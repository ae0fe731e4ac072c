//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Channel name is empty or otherwise unusable
    #[error("Invalid channel name: {0}")]
    InvalidChannelName(String),

    /// Author identifier is empty
    #[error("Invalid author identifier: {0}")]
    InvalidAuthorId(String),

    /// Timestamp token is empty
    #[error("Invalid timestamp token: {0}")]
    InvalidTimestamp(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
