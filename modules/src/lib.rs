//! Typed IBC data structures shared by the relayer: ICS-24 identifiers and
//! their validation, connection and channel ends, packets, and the protobuf
//! messages exchanged during the handshakes.
//!
//! The types here are deliberately wire-first: every domain type converts to
//! a raw prost struct in [`proto`] and back, and message types implement
//! [`tx_msg::Msg`] to be packed into a transaction.

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

pub mod ics02_client;
pub mod ics03_connection;
pub mod ics04_channel;
pub mod ics07_tendermint;
pub mod ics20_transfer;
pub mod ics23_commitment;
pub mod ics24_host;
pub mod proto;
pub mod signer;
pub mod tx_msg;
