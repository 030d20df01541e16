//! Raw protobuf wire types.
//!
//! These structs mirror the proto definitions of the counterparty chains and
//! are kept in the generated-code style (explicit field tags, `Option` for
//! nested messages) so the encoding is byte-for-byte deterministic. Domain
//! types in the `ics*` modules convert to and from these.

pub mod channel;
pub mod client;
pub mod connection;
pub mod cosmos;
pub mod transfer;
