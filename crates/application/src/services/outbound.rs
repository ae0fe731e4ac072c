//! Outbound message send
//!
//! Posts a message to a remote channel and follows up with a best-effort
//! resynchronization so the local mirror picks the message up promptly.
//! The follow-up targets the channel actually posted to unless an
//! explicit override is configured; its failure is logged and never
//! raised to the caller.

use std::sync::Arc;

use domain::ChannelName;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ChannelGatewayPort, MessageAck},
    services::{ChannelDirectoryService, HistorySyncService},
};

/// Sends messages to remote channels with a post-send consistency nudge
pub struct OutboundMessageService {
    directory: Arc<ChannelDirectoryService>,
    gateway: Arc<dyn ChannelGatewayPort>,
    sync: Arc<HistorySyncService>,
    resync_channel: Option<ChannelName>,
}

impl std::fmt::Debug for OutboundMessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundMessageService")
            .field("resync_channel", &self.resync_channel)
            .finish_non_exhaustive()
    }
}

impl OutboundMessageService {
    /// Create a new outbound service.
    ///
    /// `resync_channel` overrides the post-send resynchronization target;
    /// when `None`, the channel just posted to is resynchronized.
    pub fn new(
        directory: Arc<ChannelDirectoryService>,
        gateway: Arc<dyn ChannelGatewayPort>,
        sync: Arc<HistorySyncService>,
        resync_channel: Option<ChannelName>,
    ) -> Self {
        Self {
            directory,
            gateway,
            sync,
            resync_channel,
        }
    }

    /// Post a message to a channel.
    ///
    /// Resolution and posting failures propagate to the caller. The
    /// follow-up resynchronization is fire-and-forget from the caller's
    /// perspective: its failure is surfaced only through the log.
    #[instrument(skip(self, body), fields(channel = %channel, body_len = body.len()))]
    pub async fn send(
        &self,
        channel: &ChannelName,
        body: &str,
    ) -> Result<MessageAck, ApplicationError> {
        let channel_id = self.directory.resolve(channel).await?;
        let ack = self.gateway.post_message(&channel_id, body).await?;

        info!(channel_id = %channel_id, "Message posted");

        let nudge = self.resync_channel.as_ref().unwrap_or(channel);
        if let Err(error) = self.sync.synchronize(nudge).await {
            warn!(
                channel = %nudge,
                error = %error,
                "Post-send resynchronization failed"
            );
        }

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use domain::ChannelId;

    use super::*;
    use crate::{
        ports::{HistoryPage, MessageStorePort, MockChannelGatewayPort, RemoteChannel},
        services::test_support::InMemoryMessageStore,
    };

    fn name(s: &str) -> ChannelName {
        ChannelName::new(s).unwrap()
    }

    fn two_channel_directory(gateway: &mut MockChannelGatewayPort) {
        gateway.expect_list_channels().returning(|| {
            Ok(vec![
                RemoteChannel {
                    id: ChannelId::new("C1"),
                    name: "general".to_string(),
                },
                RemoteChannel {
                    id: ChannelId::new("C2"),
                    name: "random".to_string(),
                },
            ])
        });
    }

    fn empty_page() -> HistoryPage {
        HistoryPage {
            messages: vec![],
            has_more: false,
            next_cursor: None,
        }
    }

    fn service_over(
        gateway: MockChannelGatewayPort,
        resync_channel: Option<ChannelName>,
    ) -> OutboundMessageService {
        let gateway: Arc<dyn ChannelGatewayPort> = Arc::new(gateway);
        let directory = Arc::new(ChannelDirectoryService::new(Arc::clone(&gateway)));
        let store: Arc<dyn MessageStorePort> = Arc::new(InMemoryMessageStore::new());
        let sync = Arc::new(HistorySyncService::new(
            Arc::clone(&directory),
            Arc::clone(&gateway),
            store,
        ));
        OutboundMessageService::new(directory, gateway, sync, resync_channel)
    }

    #[tokio::test]
    async fn send_posts_and_resyncs_posted_channel() {
        let mut gateway = MockChannelGatewayPort::new();
        two_channel_directory(&mut gateway);
        gateway
            .expect_post_message()
            .withf(|channel, text| channel.as_str() == "C1" && text == "hi")
            .times(1)
            .returning(|channel, text| {
                Ok(MessageAck {
                    channel: channel.clone(),
                    text: text.to_string(),
                })
            });
        gateway
            .expect_fetch_history()
            .withf(|channel, _| channel.as_str() == "C1")
            .times(1)
            .returning(|_, _| Ok(empty_page()));

        let service = service_over(gateway, None);
        let ack = service.send(&name("general"), "hi").await.unwrap();
        assert_eq!(ack.text, "hi");
    }

    #[tokio::test]
    async fn send_resyncs_configured_override_channel() {
        let mut gateway = MockChannelGatewayPort::new();
        two_channel_directory(&mut gateway);
        gateway
            .expect_post_message()
            .returning(|channel, text| {
                Ok(MessageAck {
                    channel: channel.clone(),
                    text: text.to_string(),
                })
            });
        gateway
            .expect_fetch_history()
            .withf(|channel, _| channel.as_str() == "C2")
            .times(1)
            .returning(|_, _| Ok(empty_page()));

        let service = service_over(gateway, Some(name("random")));
        service.send(&name("general"), "hi").await.unwrap();
    }

    #[tokio::test]
    async fn send_succeeds_when_resync_fails() {
        let mut gateway = MockChannelGatewayPort::new();
        two_channel_directory(&mut gateway);
        gateway
            .expect_post_message()
            .returning(|channel, text| {
                Ok(MessageAck {
                    channel: channel.clone(),
                    text: text.to_string(),
                })
            });
        gateway
            .expect_fetch_history()
            .returning(|_, _| Err(ApplicationError::transport("connection reset")));

        let service = service_over(gateway, None);
        let result = service.send(&name("general"), "hi").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn send_propagates_post_failure() {
        let mut gateway = MockChannelGatewayPort::new();
        two_channel_directory(&mut gateway);
        gateway
            .expect_post_message()
            .returning(|_, _| Err(ApplicationError::remote_api("msg_too_long")));
        gateway.expect_fetch_history().times(0);

        let service = service_over(gateway, None);
        let result = service.send(&name("general"), "hi").await;
        assert!(matches!(result, Err(ApplicationError::RemoteApi(_))));
    }

    #[tokio::test]
    async fn send_propagates_resolution_failure() {
        let mut gateway = MockChannelGatewayPort::new();
        gateway.expect_list_channels().returning(|| Ok(vec![]));
        gateway.expect_post_message().times(0);

        let service = service_over(gateway, None);
        let result = service.send(&name("general"), "hi").await;
        assert!(matches!(result, Err(ApplicationError::ChannelNotFound(_))));
    }
}
