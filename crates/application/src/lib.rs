//! Application layer - Use cases and orchestration
//!
//! Contains the synchronization engine, port definitions for the two
//! black-box collaborators (remote channel API, durable message store),
//! and the services exposed to external triggers.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
