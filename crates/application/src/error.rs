//! Application-level errors

use domain::{DomainError, MessageKey};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The remote API explicitly reported failure (`ok: false`)
    #[error("Remote API error: {0}")]
    RemoteApi(String),

    /// Network/HTTP-layer failure reaching the remote
    #[error("Transport error: {0}")]
    Transport(String),

    /// No channel with the requested display name exists
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Storage rejected an insert because the natural key already exists.
    ///
    /// Expected (and benign) in the insert path; anything else seeing
    /// this error indicates a logic bug.
    #[error("Duplicate natural key: {0}")]
    DuplicateKey(String),

    /// A page-level failure aborted an in-progress synchronization.
    ///
    /// Messages persisted from earlier pages stay committed; the counts
    /// record how far the call got before failing.
    #[error(
        "Synchronization failed after {pages_committed} page(s), \
         {messages_committed} message(s) committed: {source}"
    )]
    Sync {
        /// Pages fully processed before the failure
        pages_committed: usize,
        /// Messages persisted before the failure
        messages_committed: usize,
        /// The page-level cause
        #[source]
        source: Box<ApplicationError>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a remote API error
    pub fn remote_api(msg: impl Into<String>) -> Self {
        Self::RemoteApi(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a channel-not-found error
    pub fn channel_not_found(name: impl Into<String>) -> Self {
        Self::ChannelNotFound(name.into())
    }

    /// Create a duplicate-key error for a natural key
    pub fn duplicate_key(key: &MessageKey) -> Self {
        Self::DuplicateKey(key.to_string())
    }

    /// Wrap a page-level failure with the progress committed so far
    pub fn sync(pages_committed: usize, messages_committed: usize, source: Self) -> Self {
        Self::Sync {
            pages_committed,
            messages_committed,
            source: Box::new(source),
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Sync { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{AuthorId, MessageTimestamp};

    use super::*;

    #[test]
    fn remote_api_error_display() {
        let err = ApplicationError::remote_api("invalid_auth");
        assert_eq!(err.to_string(), "Remote API error: invalid_auth");
    }

    #[test]
    fn channel_not_found_display() {
        let err = ApplicationError::channel_not_found("general");
        assert_eq!(err.to_string(), "Channel not found: general");
    }

    #[test]
    fn duplicate_key_carries_key() {
        let key = MessageKey::new(
            AuthorId::new("U1").unwrap(),
            MessageTimestamp::new("100.1").unwrap(),
        );
        let err = ApplicationError::duplicate_key(&key);
        assert_eq!(err.to_string(), "Duplicate natural key: U1@100.1");
    }

    #[test]
    fn sync_error_reports_progress() {
        let err = ApplicationError::sync(2, 37, ApplicationError::transport("connection reset"));
        let text = err.to_string();
        assert!(text.contains("2 page(s)"));
        assert!(text.contains("37 message(s)"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn sync_error_exposes_source() {
        let err = ApplicationError::sync(0, 0, ApplicationError::remote_api("ratelimited"));
        match err {
            ApplicationError::Sync { source, .. } => {
                assert!(matches!(*source, ApplicationError::RemoteApi(_)));
            },
            _ => unreachable!("expected Sync error"),
        }
    }

    #[test]
    fn transport_is_retryable() {
        assert!(ApplicationError::transport("timeout").is_retryable());
        assert!(!ApplicationError::remote_api("invalid_auth").is_retryable());
    }

    #[test]
    fn sync_retryability_follows_source() {
        let retryable = ApplicationError::sync(1, 1, ApplicationError::transport("reset"));
        assert!(retryable.is_retryable());

        let terminal = ApplicationError::sync(1, 1, ApplicationError::remote_api("gone"));
        assert!(!terminal.is_retryable());
    }

    #[test]
    fn domain_error_converts() {
        let err: ApplicationError = DomainError::InvalidChannelName("(empty)".to_string()).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }
}
