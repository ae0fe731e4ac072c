//! Value objects for the channel mirror domain

mod author_id;
mod channel_id;
mod channel_name;
mod message_key;
mod message_timestamp;

pub use author_id::AuthorId;
pub use channel_id::ChannelId;
pub use channel_name::ChannelName;
pub use message_key::MessageKey;
pub use message_timestamp::MessageTimestamp;
