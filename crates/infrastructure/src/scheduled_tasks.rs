//! Factory functions for scheduled tasks
//!
//! Provides the pre-built task closure the scheduler runs: periodic
//! resynchronization of the configured channels. The core only exposes
//! the callable hook; interval policy lives in [`crate::scheduler`].

use std::sync::Arc;

use application::services::HistorySyncService;
use domain::ChannelName;
use futures::future::BoxFuture;
use tracing::{debug, error, info};

/// Task name for the periodic history synchronization
pub const HISTORY_SYNC_TASK: &str = "history_sync";

/// Create the periodic history synchronization task closure.
///
/// Each invocation synchronizes the configured channels sequentially;
/// per-channel failures are logged and folded into the task result
/// without stopping the remaining channels.
pub fn create_history_sync_task(
    sync: Arc<HistorySyncService>,
    channels: Vec<ChannelName>,
) -> impl Fn() -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static {
    move || {
        let sync = Arc::clone(&sync);
        let channels = channels.clone();

        Box::pin(async move {
            info!(channels = channels.len(), "Periodic history synchronization triggered");

            let mut failures = 0_usize;
            for name in &channels {
                match sync.synchronize(name).await {
                    Ok(report) => {
                        debug!(
                            channel = %name,
                            pages = report.pages_fetched,
                            inserted = report.messages_inserted,
                            skipped = report.messages_skipped,
                            "Channel synchronized"
                        );
                    },
                    Err(e) => {
                        error!(channel = %name, error = %e, "Channel synchronization failed");
                        failures += 1;
                    },
                }
            }

            if failures > 0 {
                Err(format!("{failures} channel(s) failed to synchronize"))
            } else {
                Ok(())
            }
        })
    }
}
