//! Database migrations
//!
//! Manages database schema versioning and migrations.
//!
//! SQL migration files are stored in the `/migrations` directory at the
//! project root as documentation; the migration code itself is embedded
//! here for runtime execution. To add a migration, create
//! `migrations/VXXX__description.sql`, increment `SCHEMA_VERSION`, add a
//! `migrate_vX` function and call it from `run_migrations`.

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            if let Err(e) = migrate_v1(conn) {
                error!(
                    version = 1,
                    error = %e,
                    "Migration V001 (channel messages) failed. Check migrations/V001__channel_messages.sql for the expected schema."
                );
                return Err(e);
            }
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Database migrations complete");
    } else {
        debug!(version = current_version, "Database schema is up to date");
    }

    Ok(())
}

/// Get current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    // Create schema_version table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: Channel messages
/// See: migrations/V001__channel_messages.sql
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: Channel messages");

    conn.execute_batch(
        "
        -- Mirrored channel messages
        CREATE TABLE IF NOT EXISTS channel_messages (
            id TEXT PRIMARY KEY,
            author_id TEXT NOT NULL,
            ts TEXT NOT NULL,
            text TEXT NOT NULL,
            channel_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            inserted_at TEXT NOT NULL
        );

        -- The (author, timestamp) natural key; keeps concurrent inserts
        -- of the same remote message from both landing.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_channel_messages_natural_key
            ON channel_messages(author_id, ts);

        CREATE INDEX IF NOT EXISTS idx_channel_messages_channel
            ON channel_messages(channel_id);
        CREATE INDEX IF NOT EXISTS idx_channel_messages_ts
            ON channel_messages(ts);
        ",
    )?;

    Ok(())
}
