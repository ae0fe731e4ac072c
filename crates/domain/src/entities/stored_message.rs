//! Stored message entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{AuthorId, ChannelId, MessageKey, MessageTimestamp};

/// A remote message as persisted in the local store.
///
/// Created once when first observed and never mutated or deleted
/// afterwards; a later remote message with the same natural key (even
/// with a different body) is dropped as a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMessage {
    /// Surrogate key assigned at creation
    pub id: Uuid,
    /// Remote author identifier
    pub author: AuthorId,
    /// Remote timestamp token (identity and ordering key)
    pub ts: MessageTimestamp,
    /// Free-text body as received
    pub text: String,
    /// Channel the message belongs to
    pub channel: ChannelId,
    /// Remote type/subtype tag (e.g. `message`)
    pub kind: String,
    /// Local insertion time
    pub inserted_at: DateTime<Utc>,
}

impl StoredMessage {
    /// Create a new stored message from remote fields
    pub fn new(
        author: AuthorId,
        ts: MessageTimestamp,
        text: impl Into<String>,
        channel: ChannelId,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            ts,
            text: text.into(),
            channel,
            kind: kind.into(),
            inserted_at: Utc::now(),
        }
    }

    /// The (author, timestamp) natural key of this message
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.author.clone(), self.ts.clone())
    }
}
