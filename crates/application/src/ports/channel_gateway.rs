//! Channel gateway port - interface to the remote messaging platform
//!
//! Abstracts the three remote capabilities the core consumes: listing
//! channels, walking a channel's history page by page, and posting a
//! message. The HTTP transport behind it is a black box; adapters map
//! transport and remote-reported failures into the application error
//! taxonomy before they reach this boundary.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{AuthorId, ChannelId, MessageKey, MessageTimestamp};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A channel as listed by the remote platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteChannel {
    /// Stable remote-assigned identifier
    pub id: ChannelId,
    /// Display name, unique within the workspace at a point in time
    pub name: String,
}

/// A message as received from the remote history capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteMessage {
    /// Author identifier
    pub author: AuthorId,
    /// Remote timestamp token (identity and ordering key)
    pub ts: MessageTimestamp,
    /// Free-text body
    pub text: String,
    /// Channel the message belongs to
    pub channel: ChannelId,
    /// Remote type/subtype tag
    pub kind: String,
}

impl RemoteMessage {
    /// The (author, timestamp) natural key of this message
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.author.clone(), self.ts.clone())
    }
}

/// One page of channel history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    /// Messages in the order received
    pub messages: Vec<RemoteMessage>,
    /// Whether the remote reports further pages
    pub has_more: bool,
    /// Continuation token for the next page, if any
    pub next_cursor: Option<String>,
}

/// Acknowledgement for a posted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAck {
    /// Channel the message was posted to
    pub channel: ChannelId,
    /// Body echoed back by the remote
    pub text: String,
}

/// Port for the remote channel API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChannelGatewayPort: Send + Sync {
    /// List all channels visible to the credential, in the order received
    async fn list_channels(&self) -> Result<Vec<RemoteChannel>, ApplicationError>;

    /// Fetch one page of history for a channel.
    ///
    /// `cursor` is the continuation token from the previous page; `None`
    /// on the first call.
    async fn fetch_history<'a>(
        &self,
        channel: &ChannelId,
        cursor: Option<&'a str>,
    ) -> Result<HistoryPage, ApplicationError>;

    /// Post a message to a channel
    async fn post_message(
        &self,
        channel: &ChannelId,
        text: &str,
    ) -> Result<MessageAck, ApplicationError>;
}
