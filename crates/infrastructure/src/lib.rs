//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the SQLite
//! message store, the Slack gateway adapter, configuration loading, the
//! periodic trigger wiring, and tracing setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod scheduled_tasks;
pub mod scheduler;
pub mod telemetry;

pub use adapters::SlackChannelGateway;
pub use config::{AppConfig, DatabaseConfig, SlackConfig, SyncConfig};
pub use persistence::{ConnectionPool, SqliteMessageStore, create_pool};
pub use scheduled_tasks::{HISTORY_SYNC_TASK, create_history_sync_task};
pub use scheduler::{SchedulerError, TaskScheduler};
pub use telemetry::init_tracing;
