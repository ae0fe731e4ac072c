//! Channel directory resolver
//!
//! Maps a channel display name to the remote platform's stable channel
//! identifier by listing all channels and matching by name. No caching:
//! every resolution re-fetches the full channel list, an explicit
//! cost/simplicity tradeoff at low channel counts. The list call assumes
//! the full directory fits in one response.

use std::sync::Arc;

use domain::{ChannelId, ChannelName};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ChannelGatewayPort};

/// Resolves channel display names against the remote directory
#[derive(Clone)]
pub struct ChannelDirectoryService {
    gateway: Arc<dyn ChannelGatewayPort>,
}

impl std::fmt::Debug for ChannelDirectoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelDirectoryService").finish_non_exhaustive()
    }
}

impl ChannelDirectoryService {
    /// Create a new directory service over a channel gateway
    pub fn new(gateway: Arc<dyn ChannelGatewayPort>) -> Self {
        Self { gateway }
    }

    /// Resolve a display name to the remote channel identifier.
    ///
    /// Matching is exact and case-sensitive. Fails with
    /// [`ApplicationError::ChannelNotFound`] when no channel carries the
    /// requested name; remote and transport failures propagate unchanged.
    #[instrument(skip(self), fields(channel = %name))]
    pub async fn resolve(&self, name: &ChannelName) -> Result<ChannelId, ApplicationError> {
        let channels = self.gateway.list_channels().await?;

        let resolved = channels
            .into_iter()
            .find(|channel| channel.name == name.as_str())
            .map(|channel| channel.id)
            .ok_or_else(|| ApplicationError::channel_not_found(name.as_str()))?;

        debug!(channel_id = %resolved, "Resolved channel name");
        Ok(resolved)
    }

    /// List all channel names, in the order the remote returned them
    #[instrument(skip(self))]
    pub async fn list_channel_names(&self) -> Result<Vec<String>, ApplicationError> {
        let channels = self.gateway.list_channels().await?;
        Ok(channels.into_iter().map(|channel| channel.name).collect())
    }
}
