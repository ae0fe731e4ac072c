//! SQLite message store implementation
//!
//! Implements the MessageStorePort using SQLite. The (author, ts)
//! uniqueness index backs the natural-key invariant; a constraint
//! violation on insert surfaces as `ApplicationError::DuplicateKey` so
//! the insert path can treat it as "already existed".

use std::sync::Arc;

use application::{error::ApplicationError, ports::MessageStorePort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{AuthorId, ChannelId, MessageKey, MessageTimestamp, StoredMessage};
use rusqlite::{OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::connection::ConnectionPool;

/// SQLite-based message store
#[derive(Debug, Clone)]
pub struct SqliteMessageStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteMessageStore {
    /// Create a new SQLite message store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStorePort for SqliteMessageStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn find_by_key(
        &self,
        key: &MessageKey,
    ) -> Result<Option<StoredMessage>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let author = key.author.as_str().to_string();
        let ts = key.ts.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.query_row(
                "SELECT id, author_id, ts, text, channel_id, kind, inserted_at
                 FROM channel_messages WHERE author_id = ?1 AND ts = ?2",
                params![author, ts],
                row_to_message,
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, message), fields(key = %message.key()))]
    async fn insert(&self, message: &StoredMessage) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let message = message.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let result = conn.execute(
                "INSERT INTO channel_messages (id, author_id, ts, text, channel_id, kind, inserted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    message.id.to_string(),
                    message.author.as_str(),
                    message.ts.as_str(),
                    message.text,
                    message.channel.as_str(),
                    message.kind,
                    message.inserted_at.to_rfc3339(),
                ],
            );

            match result {
                Ok(_) => {
                    debug!("Stored message");
                    Ok(())
                },
                Err(e) if is_unique_violation(&e) => {
                    Err(ApplicationError::duplicate_key(&message.key()))
                },
                Err(e) => Err(ApplicationError::Internal(e.to_string())),
            }
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn query<'a>(
        &self,
        text_filter: Option<&'a str>,
    ) -> Result<Vec<StoredMessage>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let pattern = text_filter.map(|filter| format!("%{filter}%"));

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let messages = match pattern {
                Some(pattern) => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, author_id, ts, text, channel_id, kind, inserted_at
                             FROM channel_messages WHERE text LIKE ?1 ORDER BY ts ASC",
                        )
                        .map_err(|e| ApplicationError::Internal(e.to_string()))?;
                    stmt.query_map([pattern], row_to_message)
                        .map_err(|e| ApplicationError::Internal(e.to_string()))?
                        .filter_map(Result::ok)
                        .collect()
                },
                None => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, author_id, ts, text, channel_id, kind, inserted_at
                             FROM channel_messages ORDER BY ts ASC",
                        )
                        .map_err(|e| ApplicationError::Internal(e.to_string()))?;
                    stmt.query_map([], row_to_message)
                        .map_err(|e| ApplicationError::Internal(e.to_string()))?
                        .filter_map(Result::ok)
                        .collect()
                },
            };

            Ok(messages)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn row_to_message(row: &Row<'_>) -> rusqlite::Result<StoredMessage> {
    let id_str: String = row.get(0)?;
    let author_str: String = row.get(1)?;
    let ts_str: String = row.get(2)?;
    let text: String = row.get(3)?;
    let channel_str: String = row.get(4)?;
    let kind: String = row.get(5)?;
    let inserted_at_str: String = row.get(6)?;

    let id = Uuid::parse_str(&id_str).unwrap_or_else(|_| Uuid::new_v4());
    let author = AuthorId::new(author_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let ts = MessageTimestamp::new(ts_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let inserted_at = DateTime::parse_from_rfc3339(&inserted_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    Ok(StoredMessage {
        id,
        author,
        ts,
        text,
        channel: ChannelId::new(channel_str),
        kind,
        inserted_at,
    })
}
