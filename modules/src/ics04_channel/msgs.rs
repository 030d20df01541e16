use serde::{Deserialize, Serialize};

use crate::ics04_channel::channel::ChannelEnd;
use crate::ics04_channel::packet::Packet;
use crate::ics23_commitment::CommitmentProofBytes;
use crate::ics24_host::identifier::{ChannelId, PortId};
use crate::proto::channel::{
    MsgChannelCloseConfirm as RawMsgChannelCloseConfirm,
    MsgChannelCloseInit as RawMsgChannelCloseInit, MsgChannelOpenAck as RawMsgChannelOpenAck,
    MsgChannelOpenConfirm as RawMsgChannelOpenConfirm, MsgChannelOpenInit as RawMsgChannelOpenInit,
    MsgChannelOpenTry as RawMsgChannelOpenTry, MsgRecvPacket as RawMsgRecvPacket,
};
use crate::signer::Signer;
use crate::tx_msg::Msg;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelOpenInit {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub channel: ChannelEnd,
    pub signer: Signer,
}

impl Msg for MsgChannelOpenInit {
    type Raw = RawMsgChannelOpenInit;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenInit";
}

impl From<MsgChannelOpenInit> for RawMsgChannelOpenInit {
    fn from(msg: MsgChannelOpenInit) -> Self {
        RawMsgChannelOpenInit {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            channel: Some(msg.channel.into()),
            signer: msg.signer.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelOpenTry {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub channel: ChannelEnd,
    pub counterparty_version: String,
    pub proof_init: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgChannelOpenTry {
    type Raw = RawMsgChannelOpenTry;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenTry";
}

impl From<MsgChannelOpenTry> for RawMsgChannelOpenTry {
    fn from(msg: MsgChannelOpenTry) -> Self {
        RawMsgChannelOpenTry {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            channel: Some(msg.channel.into()),
            counterparty_version: msg.counterparty_version,
            proof_init: msg.proof_init.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelOpenAck {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub counterparty_version: String,
    pub proof_try: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgChannelOpenAck {
    type Raw = RawMsgChannelOpenAck;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenAck";
}

impl From<MsgChannelOpenAck> for RawMsgChannelOpenAck {
    fn from(msg: MsgChannelOpenAck) -> Self {
        RawMsgChannelOpenAck {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            counterparty_version: msg.counterparty_version,
            proof_try: msg.proof_try.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelOpenConfirm {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub proof_ack: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgChannelOpenConfirm {
    type Raw = RawMsgChannelOpenConfirm;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelOpenConfirm";
}

impl From<MsgChannelOpenConfirm> for RawMsgChannelOpenConfirm {
    fn from(msg: MsgChannelOpenConfirm) -> Self {
        RawMsgChannelOpenConfirm {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            proof_ack: msg.proof_ack.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelCloseInit {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub signer: Signer,
}

impl Msg for MsgChannelCloseInit {
    type Raw = RawMsgChannelCloseInit;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelCloseInit";
}

impl From<MsgChannelCloseInit> for RawMsgChannelCloseInit {
    fn from(msg: MsgChannelCloseInit) -> Self {
        RawMsgChannelCloseInit {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            signer: msg.signer.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgChannelCloseConfirm {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub proof_init: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgChannelCloseConfirm {
    type Raw = RawMsgChannelCloseConfirm;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgChannelCloseConfirm";
}

impl From<MsgChannelCloseConfirm> for RawMsgChannelCloseConfirm {
    fn from(msg: MsgChannelCloseConfirm) -> Self {
        RawMsgChannelCloseConfirm {
            port_id: msg.port_id.to_string(),
            channel_id: msg.channel_id.to_string(),
            proof_init: msg.proof_init.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}

/// Deliver a packet to the destination chain along with the proof of its
/// commitment on the source chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgRecvPacket {
    pub packet: Packet,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgRecvPacket {
    type Raw = RawMsgRecvPacket;

    const TYPE_URL: &'static str = "/ibc.core.channel.v1.MsgRecvPacket";
}

impl From<MsgRecvPacket> for RawMsgRecvPacket {
    fn from(msg: MsgRecvPacket) -> Self {
        RawMsgRecvPacket {
            packet: Some(msg.packet.into()),
            proof: msg.proof.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}
