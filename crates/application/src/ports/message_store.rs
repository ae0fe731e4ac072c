//! Message storage port
//!
//! Defines the interface for persisting and querying mirrored messages.
//! The store must back the (author, timestamp) natural key with a
//! uniqueness constraint; `insert` surfaces a violation as
//! [`ApplicationError::DuplicateKey`] so callers can treat it as
//! "already existed".

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{MessageKey, StoredMessage};

use crate::error::ApplicationError;

/// Port for message persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageStorePort: Send + Sync {
    /// Look up a stored message by its natural key
    async fn find_by_key(
        &self,
        key: &MessageKey,
    ) -> Result<Option<StoredMessage>, ApplicationError>;

    /// Insert a new message.
    ///
    /// Fails with [`ApplicationError::DuplicateKey`] if a message with
    /// the same natural key already exists.
    async fn insert(&self, message: &StoredMessage) -> Result<(), ApplicationError>;

    /// Query stored messages, optionally filtered by a body substring
    async fn query<'a>(&self, text_filter: Option<&'a str>)
    -> Result<Vec<StoredMessage>, ApplicationError>;
}
