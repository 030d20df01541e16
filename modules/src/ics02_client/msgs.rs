use serde::{Deserialize, Serialize};

use crate::ics07_tendermint::{ClientState, ConsensusState, Header};
use crate::ics24_host::identifier::ClientId;
use crate::proto::client::{MsgCreateClient as RawMsgCreateClient, MsgUpdateClient as RawMsgUpdateClient};
use crate::signer::Signer;
use crate::tx_msg::Msg;

/// Create a new on-chain light client tracking the counterparty chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgCreateClient {
    pub client_id: ClientId,
    pub client_state: ClientState,
    pub consensus_state: ConsensusState,
    pub signer: Signer,
}

impl Msg for MsgCreateClient {
    type Raw = RawMsgCreateClient;

    const TYPE_URL: &'static str = "/ibc.core.client.v1.MsgCreateClient";
}

impl From<MsgCreateClient> for RawMsgCreateClient {
    fn from(msg: MsgCreateClient) -> Self {
        RawMsgCreateClient {
            client_id: msg.client_id.to_string(),
            client_state: Some(msg.client_state.to_any()),
            consensus_state: Some(msg.consensus_state.to_any()),
            signer: msg.signer.to_string(),
        }
    }
}

/// Advance an on-chain client with a header freshly verified by the local
/// light client. Always precedes the proof-bearing message that relies on
/// the consensus state it writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MsgUpdateClient {
    pub client_id: ClientId,
    pub header: Header,
    pub signer: Signer,
}

impl Msg for MsgUpdateClient {
    type Raw = RawMsgUpdateClient;

    const TYPE_URL: &'static str = "/ibc.core.client.v1.MsgUpdateClient";
}

impl From<MsgUpdateClient> for RawMsgUpdateClient {
    fn from(msg: MsgUpdateClient) -> Self {
        RawMsgUpdateClient {
            client_id: msg.client_id.to_string(),
            header: Some(msg.header.to_any()),
            signer: msg.signer.to_string(),
        }
    }
}
