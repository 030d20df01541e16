/// MsgCreateClient defines a message to create an IBC client.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCreateClient {
    /// client unique identifier
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// light client state
    #[prost(message, optional, tag = "2")]
    pub client_state: ::core::option::Option<::prost_types::Any>,
    /// consensus state associated with the client that corresponds to a given
    /// height
    #[prost(message, optional, tag = "3")]
    pub consensus_state: ::core::option::Option<::prost_types::Any>,
    /// signer address
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}

/// MsgUpdateClient defines a message to update an IBC client with a header of
/// the chain it tracks.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateClient {
    /// client unique identifier
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// header to update the light client
    #[prost(message, optional, tag = "2")]
    pub header: ::core::option::Option<::prost_types::Any>,
    /// signer address
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}

/// ClientState for the Tendermint light client tracked on the counterparty.
/// Durations are carried as nanoseconds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClientState {
    #[prost(string, tag = "1")]
    pub chain_id: ::prost::alloc::string::String,
    /// duration of the period since the latest timestamp during which the
    /// submitted headers are valid for upgrade, in nanoseconds
    #[prost(uint64, tag = "2")]
    pub trusting_period: u64,
    /// duration of the staking unbonding period, in nanoseconds
    #[prost(uint64, tag = "3")]
    pub unbonding_period: u64,
    /// latest height the client was updated to
    #[prost(uint64, tag = "4")]
    pub latest_height: u64,
    /// height at which the client was frozen due to misbehaviour, or zero
    #[prost(uint64, tag = "5")]
    pub frozen_height: u64,
}

/// ConsensusState of the Tendermint light client at a given height.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsensusState {
    /// header timestamp in nanoseconds since the unix epoch
    #[prost(int64, tag = "1")]
    pub timestamp: i64,
    /// commitment root (app hash of the header)
    #[prost(bytes = "vec", tag = "2")]
    pub root: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub next_validators_hash: ::prost::alloc::vec::Vec<u8>,
}

/// Header carried by MsgUpdateClient and MsgCreateClient: the signed header
/// plus the validator sets needed to verify it and its successor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    #[prost(message, optional, tag = "1")]
    pub signed_header: ::core::option::Option<::tendermint_proto::types::SignedHeader>,
    #[prost(message, optional, tag = "2")]
    pub validator_set: ::core::option::Option<::tendermint_proto::types::ValidatorSet>,
    #[prost(message, optional, tag = "3")]
    pub next_validator_set: ::core::option::Option<::tendermint_proto::types::ValidatorSet>,
}
