//! Wire types for the Slack Web API
//!
//! Every envelope carries `ok` plus an optional `error` string; payload
//! fields default so that a failure envelope still deserializes.

use serde::Deserialize;

/// A channel as returned by `conversations.list`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelEntry {
    /// Stable channel identifier (e.g. `C024BE91L`)
    pub id: String,
    /// Display name
    pub name: String,
}

/// Response envelope for `conversations.list`
#[derive(Debug, Deserialize)]
pub struct ListChannelsResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
    /// The channel directory, in API order
    #[serde(default)]
    pub channels: Vec<ChannelEntry>,
}

/// A message as returned by `conversations.history`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageEntry {
    /// Author identifier; absent for some bot/system items
    #[serde(default)]
    pub user: Option<String>,
    /// Message body
    #[serde(default)]
    pub text: String,
    /// String-encoded timestamp token, the message identity key
    pub ts: String,
    /// Message type tag
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Channel identifier; history items usually omit it
    #[serde(default)]
    pub channel: Option<String>,
}

fn default_kind() -> String {
    "message".to_string()
}

/// Pagination metadata carried by history responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    /// Continuation token for the next page; empty string means none
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Response envelope for `conversations.history`
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
    /// One page of messages, newest first
    #[serde(default)]
    pub messages: Vec<MessageEntry>,
    /// Whether further pages exist
    #[serde(default)]
    pub has_more: bool,
    /// Continuation token at the top level (some API surfaces)
    #[serde(default)]
    pub next_cursor: Option<String>,
    /// Continuation token in `response_metadata` (the usual place)
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl HistoryResponse {
    /// The continuation token for the next page, if one was supplied.
    ///
    /// Prefers `response_metadata.next_cursor` and falls back to the
    /// top-level field; an empty token counts as absent.
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|metadata| metadata.next_cursor.as_deref())
            .or(self.next_cursor.as_deref())
            .filter(|token| !token.is_empty())
    }
}

/// The posted message as echoed by `chat.postMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct PostedMessage {
    /// Body as accepted by the API
    #[serde(default)]
    pub text: String,
}

/// Response envelope for `chat.postMessage`
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
    /// Channel the message landed in
    #[serde(default)]
    pub channel: Option<String>,
    /// The accepted message
    #[serde(default)]
    pub message: Option<PostedMessage>,
}
