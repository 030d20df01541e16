//! ICS-03: connection ends and the four-message handshake that opens a
//! connection between two chains.

pub mod connection;
pub mod error;
pub mod msgs;

pub use connection::{ConnectionEnd, Counterparty, State};
