//! ICS-04: channel ends, packets, and the channel handshake messages.

pub mod channel;
pub mod error;
pub mod msgs;
pub mod packet;

pub use channel::{ChannelEnd, Counterparty, Order, State};
pub use packet::Packet;
