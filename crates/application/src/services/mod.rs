//! Application services
//!
//! The synchronization engine and the operations exposed to external
//! triggers (cron, outbound send, manual invocation).

mod archive;
mod channel_directory;
mod history_sync;
mod outbound;
mod seed;

#[cfg(test)]
pub(crate) mod test_support;

pub use archive::ArchiveService;
pub use channel_directory::ChannelDirectoryService;
pub use history_sync::{HistorySyncService, SyncReport};
pub use outbound::OutboundMessageService;
pub use seed::{DEFAULT_SEED_BATCH_SIZE, SeedReport, SeedService};
