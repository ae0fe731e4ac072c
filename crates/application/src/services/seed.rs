//! Bulk seed
//!
//! Loads a batch of remote-shaped records into the store using the same
//! natural-key dedup rule as the synchronizer. Records are processed in
//! fixed-size batches; existence checks and inserts run concurrently
//! within a batch while batches themselves are strictly sequential.
//! Per-record failures are isolated and tallied rather than aborting the
//! run; the storage uniqueness constraint keeps same-key records inside
//! one concurrent batch from both landing.

use std::sync::Arc;

use domain::StoredMessage;
use futures::future;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{MessageStorePort, RemoteMessage},
};

/// Default number of records processed per concurrent batch
pub const DEFAULT_SEED_BATCH_SIZE: usize = 100;

/// Aggregate outcome of a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records newly persisted
    pub inserted: usize,
    /// Records skipped because their natural key was already stored
    pub skipped: usize,
    /// Records that failed for reasons other than an expected duplicate
    pub failed: usize,
}

enum SeedOutcome {
    Inserted,
    Skipped,
    Failed(ApplicationError),
}

/// Seeds message records into the store in concurrent batches
pub struct SeedService {
    store: Arc<dyn MessageStorePort>,
    batch_size: usize,
}

impl std::fmt::Debug for SeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedService")
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl SeedService {
    /// Create a seed service with the default batch size
    pub fn new(store: Arc<dyn MessageStorePort>) -> Self {
        Self::with_batch_size(store, DEFAULT_SEED_BATCH_SIZE)
    }

    /// Create a seed service with an explicit batch size (minimum 1)
    pub fn with_batch_size(store: Arc<dyn MessageStorePort>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
        }
    }

    /// Seed records into the store, deduplicating by natural key.
    ///
    /// Returns the aggregate insert/skip/failure counts once all batches
    /// complete.
    #[instrument(skip(self, records), fields(records = records.len(), batch_size = self.batch_size))]
    pub async fn seed(&self, records: Vec<RemoteMessage>) -> Result<SeedReport, ApplicationError> {
        let mut report = SeedReport::default();

        for batch in records.chunks(self.batch_size) {
            let outcomes =
                future::join_all(batch.iter().map(|record| self.seed_one(record))).await;

            for outcome in outcomes {
                match outcome {
                    SeedOutcome::Inserted => report.inserted += 1,
                    SeedOutcome::Skipped => report.skipped += 1,
                    SeedOutcome::Failed(error) => {
                        warn!(error = %error, "Seed record failed");
                        report.failed += 1;
                    },
                }
            }
            debug!(
                inserted = report.inserted,
                skipped = report.skipped,
                failed = report.failed,
                "Seed batch complete"
            );
        }

        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            failed = report.failed,
            "Seeding complete"
        );
        Ok(report)
    }

    async fn seed_one(&self, record: &RemoteMessage) -> SeedOutcome {
        let key = record.key();
        match self.store.find_by_key(&key).await {
            Ok(Some(_)) => SeedOutcome::Skipped,
            Ok(None) => {
                let message = StoredMessage::new(
                    record.author.clone(),
                    record.ts.clone(),
                    record.text.clone(),
                    record.channel.clone(),
                    record.kind.clone(),
                );
                match self.store.insert(&message).await {
                    Ok(()) => SeedOutcome::Inserted,
                    Err(ApplicationError::DuplicateKey(_)) => SeedOutcome::Skipped,
                    Err(error) => SeedOutcome::Failed(error),
                }
            },
            Err(error) => SeedOutcome::Failed(error),
        }
    }
}
