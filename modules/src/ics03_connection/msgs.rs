use serde::{Deserialize, Serialize};

use crate::ics03_connection::connection::Counterparty;
use crate::ics23_commitment::CommitmentProofBytes;
use crate::ics24_host::identifier::{ClientId, ConnectionId};
use crate::proto::connection::{
    MsgConnectionOpenAck as RawMsgConnectionOpenAck,
    MsgConnectionOpenConfirm as RawMsgConnectionOpenConfirm,
    MsgConnectionOpenInit as RawMsgConnectionOpenInit,
    MsgConnectionOpenTry as RawMsgConnectionOpenTry,
};
use crate::signer::Signer;
use crate::tx_msg::Msg;

/// First handshake step, submitted on the initiating chain. Carries no
/// proofs: nothing exists on the counterparty yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgConnectionOpenInit {
    pub client_id: ClientId,
    pub connection_id: ConnectionId,
    pub counterparty: Counterparty,
    pub signer: Signer,
}

impl Msg for MsgConnectionOpenInit {
    type Raw = RawMsgConnectionOpenInit;

    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenInit";
}

impl From<MsgConnectionOpenInit> for RawMsgConnectionOpenInit {
    fn from(msg: MsgConnectionOpenInit) -> Self {
        RawMsgConnectionOpenInit {
            client_id: msg.client_id.to_string(),
            connection_id: msg.connection_id.to_string(),
            counterparty: Some(msg.counterparty.into()),
            signer: msg.signer.to_string(),
        }
    }
}

/// Second handshake step, submitted on the counterparty. Proves the INIT end
/// and the consensus state the initiating chain stores for us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgConnectionOpenTry {
    pub client_id: ClientId,
    pub connection_id: ConnectionId,
    pub counterparty: Counterparty,
    pub counterparty_versions: Vec<String>,
    pub proof_height: u64,
    pub proof_init: CommitmentProofBytes,
    pub proof_consensus: CommitmentProofBytes,
    pub consensus_height: u64,
    pub signer: Signer,
}

impl Msg for MsgConnectionOpenTry {
    type Raw = RawMsgConnectionOpenTry;

    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenTry";
}

impl From<MsgConnectionOpenTry> for RawMsgConnectionOpenTry {
    fn from(msg: MsgConnectionOpenTry) -> Self {
        RawMsgConnectionOpenTry {
            client_id: msg.client_id.to_string(),
            connection_id: msg.connection_id.to_string(),
            counterparty: Some(msg.counterparty.into()),
            counterparty_versions: msg.counterparty_versions,
            proof_height: msg.proof_height,
            proof_init: msg.proof_init.into_vec(),
            proof_consensus: msg.proof_consensus.into_vec(),
            consensus_height: msg.consensus_height,
            signer: msg.signer.to_string(),
        }
    }
}

/// Third handshake step, submitted back on the initiating chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgConnectionOpenAck {
    pub connection_id: ConnectionId,
    pub counterparty_connection_id: ConnectionId,
    pub version: String,
    pub proof_height: u64,
    pub proof_try: CommitmentProofBytes,
    pub proof_consensus: CommitmentProofBytes,
    pub consensus_height: u64,
    pub signer: Signer,
}

impl Msg for MsgConnectionOpenAck {
    type Raw = RawMsgConnectionOpenAck;

    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenAck";
}

impl From<MsgConnectionOpenAck> for RawMsgConnectionOpenAck {
    fn from(msg: MsgConnectionOpenAck) -> Self {
        RawMsgConnectionOpenAck {
            connection_id: msg.connection_id.to_string(),
            counterparty_connection_id: msg.counterparty_connection_id.to_string(),
            version: msg.version,
            proof_height: msg.proof_height,
            proof_try: msg.proof_try.into_vec(),
            proof_consensus: msg.proof_consensus.into_vec(),
            consensus_height: msg.consensus_height,
            signer: msg.signer.to_string(),
        }
    }
}

/// Final handshake step, submitted on the counterparty once the initiating
/// chain reached OPEN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgConnectionOpenConfirm {
    pub connection_id: ConnectionId,
    pub proof_ack: CommitmentProofBytes,
    pub proof_height: u64,
    pub signer: Signer,
}

impl Msg for MsgConnectionOpenConfirm {
    type Raw = RawMsgConnectionOpenConfirm;

    const TYPE_URL: &'static str = "/ibc.core.connection.v1.MsgConnectionOpenConfirm";
}

impl From<MsgConnectionOpenConfirm> for RawMsgConnectionOpenConfirm {
    fn from(msg: MsgConnectionOpenConfirm) -> Self {
        RawMsgConnectionOpenConfirm {
            connection_id: msg.connection_id.to_string(),
            proof_ack: msg.proof_ack.into_vec(),
            proof_height: msg.proof_height,
            signer: msg.signer.to_string(),
        }
    }
}
