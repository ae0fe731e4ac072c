//! Slack adapter for the channel gateway port
//!
//! Delegates to the integration crate's client and translates its error
//! taxonomy into the application one: a remote-reported `ok: false`
//! becomes `RemoteApi`, an HTTP/network failure becomes `Transport`.

use application::{
    error::ApplicationError,
    ports::{ChannelGatewayPort, HistoryPage, MessageAck, RemoteChannel, RemoteMessage},
};
use async_trait::async_trait;
use domain::{AuthorId, ChannelId, MessageTimestamp};
use integration_slack::{MessageEntry, SlackClient, SlackError};
use tracing::warn;

/// Channel gateway backed by the Slack Web API
#[derive(Debug, Clone)]
pub struct SlackChannelGateway {
    client: SlackClient,
}

impl SlackChannelGateway {
    /// Create a new gateway over a configured client
    pub const fn new(client: SlackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChannelGatewayPort for SlackChannelGateway {
    async fn list_channels(&self) -> Result<Vec<RemoteChannel>, ApplicationError> {
        let channels = self.client.list_channels().await.map_err(map_error)?;
        Ok(channels
            .into_iter()
            .map(|channel| RemoteChannel {
                id: ChannelId::new(channel.id),
                name: channel.name,
            })
            .collect())
    }

    async fn fetch_history<'a>(
        &self,
        channel: &ChannelId,
        cursor: Option<&'a str>,
    ) -> Result<HistoryPage, ApplicationError> {
        let page = self
            .client
            .fetch_history(channel.as_str(), cursor)
            .await
            .map_err(map_error)?;

        let mut messages = Vec::with_capacity(page.messages.len());
        for entry in page.messages {
            let ts = entry.ts.clone();
            match to_remote_message(entry, channel) {
                Some(message) => messages.push(message),
                // Without an author the natural key is undefined; such
                // items (some bot/system subtypes) cannot be mirrored.
                None => warn!(channel = %channel, ts = %ts, "Skipping history item without author"),
            }
        }

        Ok(HistoryPage {
            messages,
            has_more: page.has_more,
            next_cursor: page.next_cursor,
        })
    }

    async fn post_message(
        &self,
        channel: &ChannelId,
        text: &str,
    ) -> Result<MessageAck, ApplicationError> {
        let ack = self
            .client
            .post_message(channel.as_str(), text)
            .await
            .map_err(map_error)?;

        Ok(MessageAck {
            channel: ack.channel.map_or_else(|| channel.clone(), ChannelId::new),
            text: ack.text,
        })
    }
}

fn map_error(error: SlackError) -> ApplicationError {
    match error {
        SlackError::Api { message } => ApplicationError::RemoteApi(message),
        SlackError::Request(e) => ApplicationError::Transport(e.to_string()),
        SlackError::Configuration(message) => ApplicationError::Configuration(message),
    }
}

/// Convert a wire message into a port-level message.
///
/// History items omit the channel field, so it is filled from the
/// requested channel. Returns `None` when the item has no author.
fn to_remote_message(entry: MessageEntry, requested: &ChannelId) -> Option<RemoteMessage> {
    let author = AuthorId::new(entry.user?).ok()?;
    let ts = MessageTimestamp::new(entry.ts).ok()?;

    Some(RemoteMessage {
        author,
        ts,
        text: entry.text,
        channel: entry
            .channel
            .map_or_else(|| requested.clone(), ChannelId::new),
        kind: entry.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: Option<&str>, ts: &str) -> MessageEntry {
        serde_json::from_value(serde_json::json!({
            "type": "message",
            "user": user,
            "text": "hi",
            "ts": ts,
        }))
        .unwrap()
    }

    #[test]
    fn api_error_maps_to_remote_api() {
        let mapped = map_error(SlackError::api(Some("invalid_auth".to_string())));
        match mapped {
            ApplicationError::RemoteApi(message) => assert_eq!(message, "invalid_auth"),
            other => unreachable!("expected RemoteApi, got {other:?}"),
        }
    }

    #[test]
    fn configuration_error_maps_through() {
        let mapped = map_error(SlackError::config("api_token is required"));
        assert!(matches!(mapped, ApplicationError::Configuration(_)));
    }

    #[test]
    fn message_channel_is_filled_from_request() {
        let requested = ChannelId::new("C1");
        let message = to_remote_message(entry(Some("U1"), "100.1"), &requested).unwrap();
        assert_eq!(message.channel, requested);
        assert_eq!(message.author.as_str(), "U1");
        assert_eq!(message.ts.as_str(), "100.1");
    }

    #[test]
    fn authorless_item_is_dropped() {
        let requested = ChannelId::new("C1");
        assert!(to_remote_message(entry(None, "100.1"), &requested).is_none());
    }

    #[test]
    fn explicit_channel_is_kept() {
        let requested = ChannelId::new("C1");
        let with_channel: MessageEntry = serde_json::from_value(serde_json::json!({
            "type": "message",
            "user": "U1",
            "text": "hi",
            "ts": "100.1",
            "channel": "C9",
        }))
        .unwrap();

        let message = to_remote_message(with_channel, &requested).unwrap();
        assert_eq!(message.channel, ChannelId::new("C9"));
    }
}
