//! The closed set of messages this relayer submits.
//!
//! Keeping the variants in one enum (rather than trait objects) lets the
//! batch layer pattern-match on the message kind for logging, and keeps the
//! wire encoding a total function.

use prost_types::Any;

use relayer_modules::ics02_client::msgs::{MsgCreateClient, MsgUpdateClient};
use relayer_modules::ics03_connection::msgs::{
    MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTry,
};
use relayer_modules::ics04_channel::msgs::{
    MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck, MsgChannelOpenConfirm,
    MsgChannelOpenInit, MsgChannelOpenTry, MsgRecvPacket,
};
use relayer_modules::ics20_transfer::msgs::MsgTransfer;
use relayer_modules::tx_msg::Msg;

#[derive(Clone, Debug, PartialEq)]
pub enum IbcMessage {
    CreateClient(MsgCreateClient),
    UpdateClient(MsgUpdateClient),
    ConnOpenInit(MsgConnectionOpenInit),
    ConnOpenTry(MsgConnectionOpenTry),
    ConnOpenAck(MsgConnectionOpenAck),
    ConnOpenConfirm(MsgConnectionOpenConfirm),
    ChanOpenInit(MsgChannelOpenInit),
    ChanOpenTry(MsgChannelOpenTry),
    ChanOpenAck(MsgChannelOpenAck),
    ChanOpenConfirm(MsgChannelOpenConfirm),
    ChanCloseInit(MsgChannelCloseInit),
    ChanCloseConfirm(MsgChannelCloseConfirm),
    Transfer(MsgTransfer),
    RecvPacket(MsgRecvPacket),
}

impl IbcMessage {
    /// Short action tag used in transaction logs.
    pub fn action(&self) -> &'static str {
        match self {
            Self::CreateClient(_) => "create_client",
            Self::UpdateClient(_) => "update_client",
            Self::ConnOpenInit(_) => "connection_open_init",
            Self::ConnOpenTry(_) => "connection_open_try",
            Self::ConnOpenAck(_) => "connection_open_ack",
            Self::ConnOpenConfirm(_) => "connection_open_confirm",
            Self::ChanOpenInit(_) => "channel_open_init",
            Self::ChanOpenTry(_) => "channel_open_try",
            Self::ChanOpenAck(_) => "channel_open_ack",
            Self::ChanOpenConfirm(_) => "channel_open_confirm",
            Self::ChanCloseInit(_) => "channel_close_init",
            Self::ChanCloseConfirm(_) => "channel_close_confirm",
            Self::Transfer(_) => "transfer",
            Self::RecvPacket(_) => "recv_packet",
        }
    }

    /// Packs the message for inclusion in a transaction body.
    pub fn to_any(&self) -> Any {
        match self.clone() {
            Self::CreateClient(msg) => msg.to_any(),
            Self::UpdateClient(msg) => msg.to_any(),
            Self::ConnOpenInit(msg) => msg.to_any(),
            Self::ConnOpenTry(msg) => msg.to_any(),
            Self::ConnOpenAck(msg) => msg.to_any(),
            Self::ConnOpenConfirm(msg) => msg.to_any(),
            Self::ChanOpenInit(msg) => msg.to_any(),
            Self::ChanOpenTry(msg) => msg.to_any(),
            Self::ChanOpenAck(msg) => msg.to_any(),
            Self::ChanOpenConfirm(msg) => msg.to_any(),
            Self::ChanCloseInit(msg) => msg.to_any(),
            Self::ChanCloseConfirm(msg) => msg.to_any(),
            Self::Transfer(msg) => msg.to_any(),
            Self::RecvPacket(msg) => msg.to_any(),
        }
    }

    pub fn is_update_client(&self) -> bool {
        matches!(self, Self::UpdateClient(_))
    }
}
