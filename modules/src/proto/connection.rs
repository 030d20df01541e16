/// MerklePrefix is the prefix under which the counterparty stores its IBC
/// state (ICS-23).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MerklePrefix {
    #[prost(bytes = "vec", tag = "1")]
    pub key_prefix: ::prost::alloc::vec::Vec<u8>,
}

/// Counterparty defines the counterparty chain's connection and client
/// identifiers together with its commitment prefix.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Counterparty {
    /// identifies the client on the counterparty chain associated with a given
    /// connection.
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// identifies the connection end on the counterparty chain associated with
    /// a given connection.
    #[prost(string, tag = "2")]
    pub connection_id: ::prost::alloc::string::String,
    /// commitment merkle prefix of the counterparty chain.
    #[prost(message, optional, tag = "3")]
    pub prefix: ::core::option::Option<MerklePrefix>,
}

/// ConnectionEnd defines a stateful object on a chain connected to another
/// separate one.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionEnd {
    /// client associated with this connection.
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    /// IBC version which can be utilised to determine encodings or protocols
    /// for channels or packets utilising this connection.
    #[prost(string, repeated, tag = "2")]
    pub versions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// current state of the connection end.
    #[prost(int32, tag = "3")]
    pub state: i32,
    /// counterparty chain associated with this connection.
    #[prost(message, optional, tag = "4")]
    pub counterparty: ::core::option::Option<Counterparty>,
}

/// MsgConnectionOpenInit defines the msg sent by an account on Chain A to
/// initialize a connection with Chain B.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgConnectionOpenInit {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub connection_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub counterparty: ::core::option::Option<Counterparty>,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}

/// MsgConnectionOpenTry defines a msg sent by a Relayer to try to open a
/// connection on Chain B.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgConnectionOpenTry {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub connection_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub counterparty: ::core::option::Option<Counterparty>,
    #[prost(string, repeated, tag = "4")]
    pub counterparty_versions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// height at which the proofs are to be verified on the host chain
    #[prost(uint64, tag = "5")]
    pub proof_height: u64,
    /// proof of the initialised connection end stored on Chain A
    #[prost(bytes = "vec", tag = "6")]
    pub proof_init: ::prost::alloc::vec::Vec<u8>,
    /// proof of the consensus state of Chain B stored on Chain A
    #[prost(bytes = "vec", tag = "7")]
    pub proof_consensus: ::prost::alloc::vec::Vec<u8>,
    /// height of the consensus state proven above
    #[prost(uint64, tag = "8")]
    pub consensus_height: u64,
    #[prost(string, tag = "9")]
    pub signer: ::prost::alloc::string::String,
}

/// MsgConnectionOpenAck defines a msg sent by a Relayer to Chain A to
/// acknowledge the change of connection state to TRYOPEN on Chain B.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgConnectionOpenAck {
    #[prost(string, tag = "1")]
    pub connection_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub counterparty_connection_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub version: ::prost::alloc::string::String,
    #[prost(uint64, tag = "4")]
    pub proof_height: u64,
    /// proof of the connection end stored on Chain B in TRYOPEN state
    #[prost(bytes = "vec", tag = "5")]
    pub proof_try: ::prost::alloc::vec::Vec<u8>,
    /// proof of the consensus state of Chain A stored on Chain B
    #[prost(bytes = "vec", tag = "6")]
    pub proof_consensus: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "7")]
    pub consensus_height: u64,
    #[prost(string, tag = "8")]
    pub signer: ::prost::alloc::string::String,
}

/// MsgConnectionOpenConfirm defines a msg sent by a Relayer to Chain B to
/// acknowledge the change of connection state to OPEN on Chain A.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgConnectionOpenConfirm {
    #[prost(string, tag = "1")]
    pub connection_id: ::prost::alloc::string::String,
    /// proof of the connection end stored on Chain A in OPEN state
    #[prost(bytes = "vec", tag = "2")]
    pub proof_ack: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub proof_height: u64,
    #[prost(string, tag = "4")]
    pub signer: ::prost::alloc::string::String,
}
