//! Relayer library for the Inter-Blockchain Communication protocol between
//! Tendermint chains.
//!
//! A [`chain::Chain`] binds a configured identity (chain id, RPC endpoint,
//! signing key, gas policy) to a persistent light-client store ([`light`])
//! and a proof-aware query layer ([`chain::query`]). The handshake engine
//! ([`handshake`]) decides, from the two chains' IBC object states, which
//! message to submit next and on which side; the drivers in [`relay`] tick
//! the engine to quiescence and relay packets, batching their output through
//! [`relay_msgs::RelayMsgs`].

#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

pub mod chain;
pub mod config;
pub mod error;
pub mod handshake;
pub mod keyring;
pub mod light;
pub mod msgs;
pub mod path;
pub mod relay;
pub mod relay_msgs;
pub mod sdk_error;
pub mod tx;
pub mod util;
