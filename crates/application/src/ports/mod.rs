//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! its two black-box collaborators: the remote channel API and the
//! durable message store. Adapters in the infrastructure layer implement
//! these ports.

mod channel_gateway;
mod message_store;

pub use channel_gateway::{
    ChannelGatewayPort, HistoryPage, MessageAck, RemoteChannel, RemoteMessage,
};
#[cfg(test)]
pub use channel_gateway::MockChannelGatewayPort;
pub use message_store::MessageStorePort;
#[cfg(test)]
pub use message_store::MockMessageStorePort;
