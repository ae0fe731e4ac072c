//! Domain entities

mod stored_message;

pub use stored_message::StoredMessage;
