//! ICS-07: the Tendermint light client types exchanged with the
//! counterparty — the header bundle proven by the local light client, and
//! the client/consensus states derived from it.

pub mod client_state;
pub mod consensus_state;
pub mod error;
pub mod header;

pub use client_state::ClientState;
pub use consensus_state::ConsensusState;
pub use header::Header;
