//! Message constructors.
//!
//! Pure functions on [`PathEnd`]: given the counterparty's end, query
//! responses, and a signing address, they produce the typed IBC message to
//! submit. The convention throughout is that the method receiver is the end
//! of the chain the message will be submitted on.

use std::time::Duration;

use prost::Message as ProstMessage;

use relayer_modules::ics02_client::msgs::{MsgCreateClient, MsgUpdateClient};
use relayer_modules::ics03_connection::connection::Counterparty as ConnectionCounterparty;
use relayer_modules::ics03_connection::msgs::{
    MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTry,
};
use relayer_modules::ics04_channel::channel::{
    ChannelEnd, Counterparty as ChannelCounterparty, Order, State as ChannelState,
};
use relayer_modules::ics04_channel::msgs::{
    MsgChannelCloseConfirm, MsgChannelCloseInit, MsgChannelOpenAck, MsgChannelOpenConfirm,
    MsgChannelOpenInit, MsgChannelOpenTry, MsgRecvPacket,
};
use relayer_modules::ics04_channel::Packet;
use relayer_modules::ics07_tendermint::{ClientState, Header};
use relayer_modules::ics20_transfer::msgs::MsgTransfer;
use relayer_modules::ics23_commitment::{CommitmentPrefix, CommitmentProofBytes};
use relayer_modules::proto::cosmos::Coin;
use relayer_modules::proto::transfer::FungibleTokenPacketData;
use relayer_modules::signer::Signer;

use crate::chain::query::{ChannelResponse, ConnectionResponse, ConsensusStateResponse};
use crate::error::Error;
use crate::path::PathEnd;

/// Prefix under which every counterparty stores its IBC state.
pub const DEFAULT_CHAIN_PREFIX: &str = "ibc";

/// The IBC version negotiated in handshakes.
pub const DEFAULT_IBC_VERSION: &str = "1.0.0";

/// Unbonding time written into created clients (three weeks).
pub const DEFAULT_UNBONDING_TIME: Duration = Duration::from_secs(504 * 60 * 60);

fn default_prefix() -> CommitmentPrefix {
    CommitmentPrefix::from(DEFAULT_CHAIN_PREFIX)
}

impl PathEnd {
    /// Creates the client on this end tracking the counterparty chain whose
    /// header is given. The trusting period is the counterparty chain's
    /// configuration; the unbonding time is fixed.
    pub fn create_client(
        &self,
        dst_header: &Header,
        trusting_period: Duration,
        signer: Signer,
    ) -> Result<MsgCreateClient, Error> {
        Ok(MsgCreateClient {
            client_id: self.client_id()?,
            client_state: ClientState::new(
                dst_header.chain_id(),
                trusting_period,
                DEFAULT_UNBONDING_TIME,
                dst_header.height(),
            ),
            consensus_state: dst_header.consensus_state(),
            signer,
        })
    }

    /// Updates this end's client with a fresh counterparty header.
    pub fn update_client(&self, dst_header: &Header, signer: Signer) -> Result<MsgUpdateClient, Error> {
        Ok(MsgUpdateClient {
            client_id: self.client_id()?,
            header: dst_header.clone(),
            signer,
        })
    }

    /// Starts the connection handshake on this end.
    pub fn conn_init(&self, dst: &PathEnd, signer: Signer) -> Result<MsgConnectionOpenInit, Error> {
        Ok(MsgConnectionOpenInit {
            client_id: self.client_id()?,
            connection_id: self.connection_id()?,
            counterparty: ConnectionCounterparty::new(
                dst.client_id()?,
                Some(dst.connection_id()?),
                default_prefix(),
            ),
            signer,
        })
    }

    /// Responds on this end to an INIT observed on the counterparty,
    /// proving the counterparty's connection end and the consensus state it
    /// stores for us.
    pub fn conn_try(
        &self,
        dst: &PathEnd,
        dst_conn: &ConnectionResponse,
        dst_cons: &ConsensusStateResponse,
        consensus_height: u64,
        signer: Signer,
    ) -> Result<MsgConnectionOpenTry, Error> {
        Ok(MsgConnectionOpenTry {
            client_id: self.client_id()?,
            connection_id: self.connection_id()?,
            counterparty: ConnectionCounterparty::new(
                dst.client_id()?,
                Some(dst.connection_id()?),
                default_prefix(),
            ),
            counterparty_versions: vec![DEFAULT_IBC_VERSION.to_string()],
            proof_height: dst_conn.proof_height,
            proof_init: dst_conn.proof.clone(),
            proof_consensus: dst_cons.proof.clone(),
            consensus_height,
            signer,
        })
    }

    /// Acknowledges on this end a TRYOPEN observed on the counterparty.
    pub fn conn_ack(
        &self,
        dst: &PathEnd,
        dst_conn: &ConnectionResponse,
        dst_cons: &ConsensusStateResponse,
        consensus_height: u64,
        signer: Signer,
    ) -> Result<MsgConnectionOpenAck, Error> {
        let version = dst_conn
            .connection
            .versions
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_IBC_VERSION.to_string());

        Ok(MsgConnectionOpenAck {
            connection_id: self.connection_id()?,
            counterparty_connection_id: dst.connection_id()?,
            version,
            proof_height: dst_conn.proof_height,
            proof_try: dst_conn.proof.clone(),
            proof_consensus: dst_cons.proof.clone(),
            consensus_height,
            signer,
        })
    }

    /// Confirms on this end an OPEN observed on the counterparty.
    pub fn conn_confirm(
        &self,
        dst_conn: &ConnectionResponse,
        signer: Signer,
    ) -> Result<MsgConnectionOpenConfirm, Error> {
        Ok(MsgConnectionOpenConfirm {
            connection_id: self.connection_id()?,
            proof_ack: dst_conn.proof.clone(),
            proof_height: dst_conn.proof_height,
            signer,
        })
    }

    /// Starts the channel handshake on this end. The connection hops list
    /// names this end's connection first and the counterparty's second.
    pub fn chan_init(
        &self,
        dst: &PathEnd,
        ordering: Order,
        signer: Signer,
    ) -> Result<MsgChannelOpenInit, Error> {
        Ok(MsgChannelOpenInit {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            channel: ChannelEnd::new(
                ChannelState::Init,
                ordering,
                ChannelCounterparty::new(dst.port_id()?, Some(dst.channel_id()?)),
                vec![self.connection_id()?, dst.connection_id()?],
                DEFAULT_IBC_VERSION.to_string(),
            ),
            signer,
        })
    }

    /// Responds on this end to a channel INIT observed on the counterparty.
    pub fn chan_try(
        &self,
        dst: &PathEnd,
        dst_chan: &ChannelResponse,
        signer: Signer,
    ) -> Result<MsgChannelOpenTry, Error> {
        Ok(MsgChannelOpenTry {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            channel: ChannelEnd::new(
                ChannelState::TryOpen,
                dst_chan.channel.ordering,
                ChannelCounterparty::new(dst.port_id()?, Some(dst.channel_id()?)),
                vec![self.connection_id()?, dst.connection_id()?],
                DEFAULT_IBC_VERSION.to_string(),
            ),
            counterparty_version: DEFAULT_IBC_VERSION.to_string(),
            proof_init: dst_chan.proof.clone(),
            proof_height: dst_chan.proof_height,
            signer,
        })
    }

    /// Acknowledges on this end a channel TRYOPEN observed on the
    /// counterparty.
    pub fn chan_ack(
        &self,
        dst_chan: &ChannelResponse,
        signer: Signer,
    ) -> Result<MsgChannelOpenAck, Error> {
        let version = if dst_chan.channel.version.is_empty() {
            DEFAULT_IBC_VERSION.to_string()
        } else {
            dst_chan.channel.version.clone()
        };

        Ok(MsgChannelOpenAck {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            counterparty_version: version,
            proof_try: dst_chan.proof.clone(),
            proof_height: dst_chan.proof_height,
            signer,
        })
    }

    /// Confirms on this end a channel OPEN observed on the counterparty.
    pub fn chan_confirm(
        &self,
        dst_chan: &ChannelResponse,
        signer: Signer,
    ) -> Result<MsgChannelOpenConfirm, Error> {
        Ok(MsgChannelOpenConfirm {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            proof_ack: dst_chan.proof.clone(),
            proof_height: dst_chan.proof_height,
            signer,
        })
    }

    /// Starts closing this end's channel.
    pub fn chan_close_init(&self, signer: Signer) -> Result<MsgChannelCloseInit, Error> {
        Ok(MsgChannelCloseInit {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            signer,
        })
    }

    /// Confirms on this end a CLOSED observed on the counterparty.
    pub fn chan_close_confirm(
        &self,
        dst_chan: &ChannelResponse,
        signer: Signer,
    ) -> Result<MsgChannelCloseConfirm, Error> {
        Ok(MsgChannelCloseConfirm {
            port_id: self.port_id()?,
            channel_id: self.channel_id()?,
            proof_init: dst_chan.proof.clone(),
            proof_height: dst_chan.proof_height,
            signer,
        })
    }

    /// Initiates a token transfer from this end towards the counterparty.
    /// `source` is true when the denomination carries no `port/channel/`
    /// prefix.
    pub fn msg_transfer(
        &self,
        dst: &PathEnd,
        dst_height: u64,
        amount: Vec<Coin>,
        receiver: Signer,
        source: bool,
        sender: Signer,
    ) -> Result<MsgTransfer, Error> {
        dst.vport()?;
        dst.vchan()?;

        Ok(MsgTransfer {
            source_port: self.port_id()?,
            source_channel: self.channel_id()?,
            destination_height: dst_height,
            amount,
            sender,
            receiver,
            source,
        })
    }

    /// Reconstructs the transfer packet payload the chain committed when it
    /// handled our `MsgTransfer`. An indexing node is not assumed, so the
    /// relayer recomputes what it just sent.
    pub fn xfer_packet(
        &self,
        amount: Vec<Coin>,
        sender: Signer,
        receiver: Signer,
        source: bool,
    ) -> Vec<u8> {
        FungibleTokenPacketData {
            amount,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            source,
        }
        .encode_to_vec()
    }

    /// Assembles the packet with the given sequence travelling from this
    /// end to the counterparty.
    pub fn new_packet(
        &self,
        dst: &PathEnd,
        sequence: u64,
        data: Vec<u8>,
        timeout_height: u64,
    ) -> Result<Packet, Error> {
        Ok(Packet {
            sequence,
            source_port: self.port_id()?,
            source_channel: self.channel_id()?,
            destination_port: dst.port_id()?,
            destination_channel: dst.channel_id()?,
            data,
            timeout_height,
            timeout_timestamp: 0,
        })
    }

    /// Builds the delivery of a packet sent from this end, to be submitted
    /// on the counterparty together with the packet commitment proof.
    pub fn msg_recv_packet(
        &self,
        dst: &PathEnd,
        sequence: u64,
        packet_data: Vec<u8>,
        timeout_height: u64,
        proof: CommitmentProofBytes,
        proof_height: u64,
        signer: Signer,
    ) -> Result<MsgRecvPacket, Error> {
        Ok(MsgRecvPacket {
            packet: self.new_packet(dst, sequence, packet_data, timeout_height)?,
            proof,
            proof_height,
            signer,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tendermint_testgen::{Generator, LightBlock as TestgenLightBlock};

    use relayer_modules::ics04_channel::channel::{Order, State as ChannelState};
    use relayer_modules::ics04_channel::ChannelEnd;
    use relayer_modules::ics07_tendermint::Header;
    use relayer_modules::ics23_commitment::CommitmentProofBytes;
    use relayer_modules::proto::cosmos::Coin;
    use relayer_modules::signer::Signer;

    use super::{DEFAULT_CHAIN_PREFIX, DEFAULT_IBC_VERSION, DEFAULT_UNBONDING_TIME};
    use crate::chain::query::ChannelResponse;
    use crate::path::PathEnd;

    fn src_end() -> PathEnd {
        PathEnd {
            chain_id: "chain-a".to_string(),
            client_id: "clienttochainb".to_string(),
            connection_id: "connectionaaa".to_string(),
            channel_id: "channelaaaa".to_string(),
            port_id: "transfer".to_string(),
        }
    }

    fn dst_end() -> PathEnd {
        PathEnd {
            chain_id: "chain-b".to_string(),
            client_id: "clienttochaina".to_string(),
            connection_id: "connectionbbb".to_string(),
            channel_id: "channelbbbb".to_string(),
            port_id: "transfer".to_string(),
        }
    }

    fn header() -> Header {
        let block = TestgenLightBlock::new_default(12).generate().unwrap();
        Header {
            signed_header: block.signed_header,
            validator_set: block.validators,
            next_validator_set: block.next_validators,
        }
    }

    fn signer() -> Signer {
        Signer::new("cosmos1relayer")
    }

    #[test]
    fn create_client_uses_fixed_unbonding_and_configured_trusting_period() {
        let trusting = Duration::from_secs(336 * 60 * 60);
        let msg = src_end()
            .create_client(&header(), trusting, signer())
            .unwrap();

        assert_eq!(msg.client_state.trusting_period, trusting);
        assert_eq!(msg.client_state.unbonding_period, DEFAULT_UNBONDING_TIME);
        assert_eq!(DEFAULT_UNBONDING_TIME, Duration::from_secs(504 * 60 * 60));
        assert_eq!(msg.client_state.latest_height, 12);
        assert_eq!(msg.client_state.chain_id.as_str(), "test-chain");
    }

    #[test]
    fn conn_init_carries_the_default_prefix() {
        let msg = src_end().conn_init(&dst_end(), signer()).unwrap();
        assert_eq!(
            msg.counterparty.prefix.as_bytes(),
            DEFAULT_CHAIN_PREFIX.as_bytes()
        );
        assert_eq!(msg.client_id.as_str(), "clienttochainb");
        assert_eq!(
            msg.counterparty.connection_id.as_ref().unwrap().as_str(),
            "connectionbbb"
        );
    }

    #[test]
    fn channel_close_messages_target_this_end() {
        let init = src_end().chan_close_init(signer()).unwrap();
        assert_eq!(init.port_id.as_str(), "transfer");
        assert_eq!(init.channel_id.as_str(), "channelaaaa");

        let dst_chan = ChannelResponse {
            channel: ChannelEnd::new(
                ChannelState::Closed,
                Order::Ordered,
                relayer_modules::ics04_channel::Counterparty::new(
                    "transfer".parse().unwrap(),
                    Some("channelaaaa".parse().unwrap()),
                ),
                vec!["connectionbbb".parse().unwrap()],
                DEFAULT_IBC_VERSION.to_string(),
            ),
            proof: CommitmentProofBytes::from(vec![0xEE]),
            proof_height: 33,
        };

        let confirm = src_end().chan_close_confirm(&dst_chan, signer()).unwrap();
        assert_eq!(confirm.proof_height, 33);
        assert_eq!(confirm.channel_id.as_str(), "channelaaaa");
    }

    #[test]
    fn transfer_and_recv_packet_are_consistent() {
        let coins = vec![Coin {
            denom: "transfer/channelbbbb/stake".to_string(),
            amount: "100".to_string(),
        }];

        let transfer = src_end()
            .msg_transfer(
                &dst_end(),
                45,
                coins.clone(),
                Signer::new("cosmos1receiver"),
                true,
                signer(),
            )
            .unwrap();
        assert_eq!(transfer.destination_height, 45);
        assert!(transfer.source);

        let data = src_end().xfer_packet(
            coins,
            signer(),
            Signer::new("cosmos1receiver"),
            true,
        );
        assert!(!data.is_empty());

        let recv = src_end()
            .msg_recv_packet(
                &dst_end(),
                4,
                data.clone(),
                1045,
                CommitmentProofBytes::from(vec![0xAB]),
                46,
                Signer::new("cosmos1receiver"),
            )
            .unwrap();

        assert_eq!(recv.packet.sequence, 4);
        assert_eq!(recv.packet.source_channel.as_str(), "channelaaaa");
        assert_eq!(recv.packet.destination_channel.as_str(), "channelbbbb");
        assert_eq!(recv.packet.data, data);
        assert_eq!(recv.packet.timeout_height, 1045);
        assert_eq!(recv.proof_height, 46);
    }
}
