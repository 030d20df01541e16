use super::cosmos::Coin;

/// MsgTransfer defines a msg to transfer fungible tokens (i.e. coins) between
/// ICS20-enabled chains. See ICS Spec here:
/// https://github.com/cosmos/ics/tree/master/spec/ics-020-fungible-token-transfer
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgTransfer {
    /// port on which the packet will be sent
    #[prost(string, tag = "1")]
    pub source_port: ::prost::alloc::string::String,
    /// channel by which the packet will be sent
    #[prost(string, tag = "2")]
    pub source_channel: ::prost::alloc::string::String,
    /// height of the destination chain used to compute the packet timeout
    #[prost(uint64, tag = "3")]
    pub destination_height: u64,
    /// tokens to be transferred
    #[prost(message, repeated, tag = "4")]
    pub amount: ::prost::alloc::vec::Vec<Coin>,
    /// sender address on the source chain
    #[prost(string, tag = "5")]
    pub sender: ::prost::alloc::string::String,
    /// recipient address on the destination chain
    #[prost(string, tag = "6")]
    pub receiver: ::prost::alloc::string::String,
    /// whether the sending chain is the source of the tokens
    #[prost(bool, tag = "7")]
    pub source: bool,
}

/// FungibleTokenPacketData is the packet payload reconstructed by the relayer
/// when submitting MsgRecvPacket for a transfer it sent itself.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FungibleTokenPacketData {
    #[prost(message, repeated, tag = "1")]
    pub amount: ::prost::alloc::vec::Vec<Coin>,
    #[prost(string, tag = "2")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub receiver: ::prost::alloc::string::String,
    #[prost(bool, tag = "4")]
    pub source: bool,
}
