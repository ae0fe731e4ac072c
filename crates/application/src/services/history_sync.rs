//! History synchronizer
//!
//! The synchronization engine: resolves a channel name, walks the remote
//! history page by page behind an opaque cursor, filters out messages
//! already stored, and persists the remainder. Pagination position is not
//! checkpointed across calls; convergence comes from the natural-key
//! dedup making re-runs idempotent.

use std::{collections::HashMap, sync::Arc};

use domain::{ChannelId, ChannelName, StoredMessage};
use parking_lot::Mutex;
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{ChannelGatewayPort, MessageStorePort},
    services::ChannelDirectoryService,
};

/// Summary of one synchronization call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The channel that was synchronized
    pub channel: ChannelId,
    /// Pages fetched from the remote
    pub pages_fetched: usize,
    /// Messages newly persisted
    pub messages_inserted: usize,
    /// Messages skipped because their natural key was already stored
    pub messages_skipped: usize,
}

/// Synchronizes remote channel history into the local store
pub struct HistorySyncService {
    directory: Arc<ChannelDirectoryService>,
    gateway: Arc<dyn ChannelGatewayPort>,
    store: Arc<dyn MessageStorePort>,
    // Advisory per-channel locks so concurrent triggers for the same
    // channel serialize instead of racing check-then-insert.
    channel_locks: Mutex<HashMap<ChannelName, Arc<tokio::sync::Mutex<()>>>>,
}

impl std::fmt::Debug for HistorySyncService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistorySyncService").finish_non_exhaustive()
    }
}

impl HistorySyncService {
    /// Create a new synchronizer
    pub fn new(
        directory: Arc<ChannelDirectoryService>,
        gateway: Arc<dyn ChannelGatewayPort>,
        store: Arc<dyn MessageStorePort>,
    ) -> Self {
        Self {
            directory,
            gateway,
            store,
            channel_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Synchronize a channel's remote history into the local store.
    ///
    /// Pages are fetched strictly sequentially (the cursor for page N+1
    /// is only known after page N). Within a page, each message's natural
    /// key is checked against storage and only unseen messages are
    /// inserted; an insert racing a concurrent writer into a uniqueness
    /// violation counts as a skip.
    ///
    /// A page-level failure aborts the call with
    /// [`ApplicationError::Sync`] carrying the committed progress;
    /// messages persisted from earlier pages stay committed and are
    /// skipped by the next run. Resolution failures propagate unchanged.
    #[instrument(skip(self), fields(channel = %name))]
    pub async fn synchronize(&self, name: &ChannelName) -> Result<SyncReport, ApplicationError> {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;

        let channel = self.directory.resolve(name).await?;

        let mut cursor: Option<String> = None;
        let mut pages_fetched = 0_usize;
        let mut inserted = 0_usize;
        let mut skipped = 0_usize;

        loop {
            let page = self
                .gateway
                .fetch_history(&channel, cursor.as_deref())
                .await
                .map_err(|cause| ApplicationError::sync(pages_fetched, inserted, cause))?;
            pages_fetched += 1;

            for message in page.messages {
                let key = message.key();
                if self.store.find_by_key(&key).await?.is_some() {
                    debug!(key = %key, "Message already stored, skipping");
                    skipped += 1;
                    continue;
                }

                let record = StoredMessage::new(
                    message.author,
                    message.ts,
                    message.text,
                    message.channel,
                    message.kind,
                );
                match self.store.insert(&record).await {
                    Ok(()) => inserted += 1,
                    Err(ApplicationError::DuplicateKey(_)) => {
                        // Lost the check-then-insert race; the row exists.
                        debug!(key = %key, "Concurrent insert won the natural key");
                        skipped += 1;
                    },
                    Err(error) => return Err(error),
                }
            }

            // An absent or empty continuation token ends pagination even
            // if the remote still claims has_more.
            let next = page.next_cursor.filter(|token| !token.is_empty());
            if !page.has_more || next.is_none() {
                break;
            }
            cursor = next;
        }

        info!(
            channel_id = %channel,
            pages = pages_fetched,
            inserted,
            skipped,
            "Channel history synchronized"
        );

        Ok(SyncReport {
            channel,
            pages_fetched,
            messages_inserted: inserted,
            messages_skipped: skipped,
        })
    }

    fn lock_for(&self, name: &ChannelName) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.channel_locks.lock();
        Arc::clone(locks.entry(name.clone()).or_default())
    }
}
