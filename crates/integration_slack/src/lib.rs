//! Slack Web API integration
//!
//! HTTP+JSON client for the three Web API methods the channel mirror
//! consumes: `conversations.list`, `conversations.history`, and
//! `chat.postMessage`. A remote-reported failure (`ok: false` plus an
//! `error` string) is surfaced as [`SlackError::Api`], distinct from
//! transport-level failures ([`SlackError::Request`]).
//!
//! The base URL is injectable so tests can point the client at a mock
//! server.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, HistoryPage, PostedAck, SlackClient, SlackClientConfig};
pub use error::SlackError;
pub use types::{
    ChannelEntry, HistoryResponse, ListChannelsResponse, MessageEntry, PostMessageResponse,
    PostedMessage, ResponseMetadata,
};
