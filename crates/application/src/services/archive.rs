//! Stored-message queries
//!
//! Read-side access to the mirrored history for external collaborators.

use std::sync::Arc;

use domain::StoredMessage;
use tracing::instrument;

use crate::{error::ApplicationError, ports::MessageStorePort};

/// Queries the local message archive
#[derive(Clone)]
pub struct ArchiveService {
    store: Arc<dyn MessageStorePort>,
}

impl std::fmt::Debug for ArchiveService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveService").finish_non_exhaustive()
    }
}

impl ArchiveService {
    /// Create a new archive service
    pub fn new(store: Arc<dyn MessageStorePort>) -> Self {
        Self { store }
    }

    /// Fetch stored messages, optionally filtered by a body substring
    #[instrument(skip(self))]
    pub async fn query_stored(
        &self,
        text_filter: Option<&str>,
    ) -> Result<Vec<StoredMessage>, ApplicationError> {
        self.store.query(text_filter).await
    }
}
