//! SQLite persistence
//!
//! Connection pooling, schema migrations, and the message store adapter.

pub mod connection;
pub mod message_store;
pub mod migrations;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use message_store::SqliteMessageStore;
