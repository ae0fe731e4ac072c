//! Natural key identifying a remote message

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AuthorId, MessageTimestamp};

/// The (author, timestamp) pair that uniquely identifies a remote message
/// for deduplication.
///
/// At most one stored message exists per distinct key; the pair is backed
/// by a storage-level uniqueness constraint so that concurrent inserts of
/// the same key cannot both land.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKey {
    /// Author identifier half of the key
    pub author: AuthorId,
    /// Timestamp token half of the key
    pub ts: MessageTimestamp,
}

impl MessageKey {
    /// Build a key from its two halves
    pub fn new(author: AuthorId, ts: MessageTimestamp) -> Self {
        Self { author, ts }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.author, self.ts)
    }
}
