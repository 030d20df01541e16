//! ICS-02: messages operating on the on-chain clients tracking a
//! counterparty chain.

pub mod msgs;
