//! Shared test doubles for service tests

use async_trait::async_trait;
use domain::{MessageKey, StoredMessage};
use parking_lot::Mutex;

use crate::{error::ApplicationError, ports::MessageStorePort};

/// In-memory message store honoring the natural-key uniqueness contract
#[derive(Debug, Default)]
pub(crate) struct InMemoryMessageStore {
    messages: Mutex<Vec<StoredMessage>>,
}

impl InMemoryMessageStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub(crate) fn all(&self) -> Vec<StoredMessage> {
        self.messages.lock().clone()
    }
}

#[async_trait]
impl MessageStorePort for InMemoryMessageStore {
    async fn find_by_key(
        &self,
        key: &MessageKey,
    ) -> Result<Option<StoredMessage>, ApplicationError> {
        Ok(self
            .messages
            .lock()
            .iter()
            .find(|message| message.key() == *key)
            .cloned())
    }

    async fn insert(&self, message: &StoredMessage) -> Result<(), ApplicationError> {
        let mut messages = self.messages.lock();
        if messages.iter().any(|existing| existing.key() == message.key()) {
            return Err(ApplicationError::duplicate_key(&message.key()));
        }
        messages.push(message.clone());
        Ok(())
    }

    async fn query<'a>(
        &self,
        text_filter: Option<&'a str>,
    ) -> Result<Vec<StoredMessage>, ApplicationError> {
        let messages = self.messages.lock();
        Ok(match text_filter {
            Some(filter) => messages
                .iter()
                .filter(|message| message.text.contains(filter))
                .cloned()
                .collect(),
            None => messages.clone(),
        })
    }
}
