//! The handshake engine.
//!
//! A pure, symmetric state transition over the two ends of a path: given
//! both chains' IBC object states (with proofs) and both latest trusted
//! headers, it decides which message to submit next and on which side.
//! The engine never reads its own output; each tick starts from fresh
//! queries.
//!
//! Height discipline: the wrapper functions sync both light clients, then
//! query every object at `lite_height - 1` so the proofs they gather verify
//! exactly at the height the accompanying `UpdateClient` writes.

use relayer_modules::ics03_connection::State as ConnectionState;
use relayer_modules::ics04_channel::channel::{Order, State as ChannelState};
use relayer_modules::ics07_tendermint::Header;
use relayer_modules::signer::Signer;

use crate::chain::query::{
    self, ChannelResponse, ClientStateResponse, ConnectionResponse, ConsensusStateResponse,
};
use crate::chain::Chain;
use crate::error::Error;
use crate::light;
use crate::msgs::IbcMessage;
use crate::path::PathEnd;
use crate::relay_msgs::RelayMsgs;

/// Everything the engine needs to know about one side of a connection
/// handshake, gathered before the transition runs.
#[derive(Clone, Debug)]
pub struct ConnectionSide<'a> {
    pub path: &'a PathEnd,
    /// This chain's latest trusted header.
    pub header: &'a Header,
    /// This chain's connection end, queried at `header.height - 1`.
    pub connection: &'a ConnectionResponse,
    /// The client this chain keeps for the counterparty.
    pub client_state: &'a ClientStateResponse,
    /// The consensus state stored by that client at its latest height.
    pub consensus_state: &'a ConsensusStateResponse,
    pub signer: Signer,
}

/// One side of a channel handshake.
#[derive(Clone, Debug)]
pub struct ChannelSide<'a> {
    pub path: &'a PathEnd,
    pub header: &'a Header,
    /// This chain's channel end, queried at `header.height - 1`.
    pub channel: &'a ChannelResponse,
    pub signer: Signer,
}

fn consensus_height(side: &ConnectionSide<'_>) -> Result<u64, Error> {
    side.client_state
        .client_state
        .as_ref()
        .map(|cs| cs.latest_height)
        .ok_or_else(|| Error::missing_client_state(side.path.chain_id.clone()))
}

/// `[UpdateClient, ConnOpenTry]` submitted on `on`, proving `remote`'s INIT
/// end and the consensus state `remote`'s client stores for `on`.
fn conn_try_on(
    on: &ConnectionSide<'_>,
    remote: &ConnectionSide<'_>,
) -> Result<Vec<IbcMessage>, Error> {
    let consensus_height = consensus_height(remote)?;

    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ConnOpenTry(on.path.conn_try(
            remote.path,
            remote.connection,
            remote.consensus_state,
            consensus_height,
            on.signer.clone(),
        )?),
    ])
}

/// `[UpdateClient, ConnOpenAck]` submitted on `on`, proving `remote`'s
/// TRYOPEN end.
fn conn_ack_on(
    on: &ConnectionSide<'_>,
    remote: &ConnectionSide<'_>,
) -> Result<Vec<IbcMessage>, Error> {
    let consensus_height = consensus_height(remote)?;

    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ConnOpenAck(on.path.conn_ack(
            remote.path,
            remote.connection,
            remote.consensus_state,
            consensus_height,
            on.signer.clone(),
        )?),
    ])
}

/// `[UpdateClient, ConnOpenConfirm]` submitted on `on`, proving `remote`'s
/// OPEN end.
fn conn_confirm_on(
    on: &ConnectionSide<'_>,
    remote: &ConnectionSide<'_>,
) -> Result<Vec<IbcMessage>, Error> {
    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ConnOpenConfirm(
            on.path.conn_confirm(remote.connection, on.signer.clone())?,
        ),
    ])
}

/// The ICS-03 transition table. Both ends are treated symmetrically:
/// swapping the arguments yields the mirrored batch. State combinations
/// outside the table (including `Open/Open` and `Uninitialized/Open`) are
/// quiescence.
pub fn connection_handshake_messages(
    src: &ConnectionSide<'_>,
    dst: &ConnectionSide<'_>,
) -> Result<RelayMsgs, Error> {
    use ConnectionState as S;

    let mut out = RelayMsgs::default();

    match (src.connection.connection.state, dst.connection.connection.state) {
        // Nothing exists on either side; open on src first.
        (S::Uninitialized, S::Uninitialized) => {
            out.src.push(IbcMessage::ConnOpenInit(
                src.path.conn_init(dst.path, src.signer.clone())?,
            ));
        }

        (S::Uninitialized, S::Init) => out.src = conn_try_on(src, dst)?,
        (S::Init, S::Uninitialized) => out.dst = conn_try_on(dst, src)?,

        (S::Init, S::TryOpen) => out.src = conn_ack_on(src, dst)?,
        (S::TryOpen, S::Init) => out.dst = conn_ack_on(dst, src)?,

        (S::TryOpen, S::Open) => out.src = conn_confirm_on(src, dst)?,
        (S::Open, S::TryOpen) => out.dst = conn_confirm_on(dst, src)?,

        _ => {}
    }

    Ok(out)
}

fn chan_try_on(on: &ChannelSide<'_>, remote: &ChannelSide<'_>) -> Result<Vec<IbcMessage>, Error> {
    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ChanOpenTry(on.path.chan_try(remote.path, remote.channel, on.signer.clone())?),
    ])
}

fn chan_ack_on(on: &ChannelSide<'_>, remote: &ChannelSide<'_>) -> Result<Vec<IbcMessage>, Error> {
    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ChanOpenAck(on.path.chan_ack(remote.channel, on.signer.clone())?),
    ])
}

fn chan_confirm_on(
    on: &ChannelSide<'_>,
    remote: &ChannelSide<'_>,
) -> Result<Vec<IbcMessage>, Error> {
    Ok(vec![
        IbcMessage::UpdateClient(on.path.update_client(remote.header, on.signer.clone())?),
        IbcMessage::ChanOpenConfirm(on.path.chan_confirm(remote.channel, on.signer.clone())?),
    ])
}

/// The ICS-04 transition table, identical in shape to the connection one.
pub fn channel_handshake_messages(
    src: &ChannelSide<'_>,
    dst: &ChannelSide<'_>,
    ordering: Order,
) -> Result<RelayMsgs, Error> {
    use ChannelState as S;

    let mut out = RelayMsgs::default();

    match (src.channel.channel.state, dst.channel.channel.state) {
        (S::Uninitialized, S::Uninitialized) => {
            out.src.push(IbcMessage::ChanOpenInit(src.path.chan_init(
                dst.path,
                ordering,
                src.signer.clone(),
            )?));
        }

        (S::Uninitialized, S::Init) => out.src = chan_try_on(src, dst)?,
        (S::Init, S::Uninitialized) => out.dst = chan_try_on(dst, src)?,

        (S::Init, S::TryOpen) => out.src = chan_ack_on(src, dst)?,
        (S::TryOpen, S::Init) => out.dst = chan_ack_on(dst, src)?,

        (S::TryOpen, S::Open) => out.src = chan_confirm_on(src, dst)?,
        (S::Open, S::TryOpen) => out.dst = chan_confirm_on(dst, src)?,

        _ => {}
    }

    Ok(out)
}

/// Gathers the connection-handshake inputs under the height discipline and
/// runs the transition: sync both light clients, take both latest trusted
/// headers, query connection ends, client states, and stored consensus
/// states at `lite_height - 1`, then hand everything to the pure engine.
pub fn create_connection_step(src: &Chain, dst: &Chain) -> Result<RelayMsgs, Error> {
    let headers = light::updates_with_headers(src, dst)?;
    let src_header = headers
        .get(src.id())
        .ok_or_else(|| Error::missing_header(src.id().to_string()))?;
    let dst_header = headers
        .get(dst.id())
        .ok_or_else(|| Error::missing_header(dst.id().to_string()))?;

    let src_height = src_header.height().saturating_sub(1);
    let dst_height = dst_header.height().saturating_sub(1);

    let (src_conn, dst_conn) = query::query_connection_pair(src, dst, src_height, dst_height)?;
    let (src_client, dst_client) =
        query::query_client_state_pair(src, dst, src_height, dst_height)?;

    let (src_cons, dst_cons) = match (&src_client.client_state, &dst_client.client_state) {
        (Some(src_cs), Some(dst_cs)) => query::query_client_consensus_pair(
            src,
            dst,
            (src_height, src_cs.latest_height),
            (dst_height, dst_cs.latest_height),
        )?,
        // Before both clients exist only ConnOpenInit can fire, and it
        // carries no consensus proof.
        _ => (
            ConsensusStateResponse::absent(),
            ConsensusStateResponse::absent(),
        ),
    };

    let src_side = ConnectionSide {
        path: src.path_end()?,
        header: src_header,
        connection: &src_conn,
        client_state: &src_client,
        consensus_state: &src_cons,
        signer: src.get_address()?,
    };

    let dst_side = ConnectionSide {
        path: dst.path_end()?,
        header: dst_header,
        connection: &dst_conn,
        client_state: &dst_client,
        consensus_state: &dst_cons,
        signer: dst.get_address()?,
    };

    connection_handshake_messages(&src_side, &dst_side)
}

/// Gathers the channel-handshake inputs under the height discipline and
/// runs the transition.
pub fn create_channel_step(src: &Chain, dst: &Chain, ordering: Order) -> Result<RelayMsgs, Error> {
    let headers = light::updates_with_headers(src, dst)?;
    let src_header = headers
        .get(src.id())
        .ok_or_else(|| Error::missing_header(src.id().to_string()))?;
    let dst_header = headers
        .get(dst.id())
        .ok_or_else(|| Error::missing_header(dst.id().to_string()))?;

    let src_height = src_header.height().saturating_sub(1);
    let dst_height = dst_header.height().saturating_sub(1);

    let (src_chan, dst_chan) = query::query_channel_pair(src, dst, src_height, dst_height)?;

    let src_side = ChannelSide {
        path: src.path_end()?,
        header: src_header,
        channel: &src_chan,
        signer: src.get_address()?,
    };

    let dst_side = ChannelSide {
        path: dst.path_end()?,
        header: dst_header,
        channel: &dst_chan,
        signer: dst.get_address()?,
    };

    channel_handshake_messages(&src_side, &dst_side, ordering)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::time::Duration;

    use tendermint_testgen::{Generator, LightBlock as TestgenLightBlock};

    use relayer_modules::ics03_connection::{
        ConnectionEnd, Counterparty as ConnectionCounterparty, State as ConnectionState,
    };
    use relayer_modules::ics04_channel::channel::{
        ChannelEnd, Counterparty as ChannelCounterparty, Order, State as ChannelState,
    };
    use relayer_modules::ics07_tendermint::{ClientState, Header};
    use relayer_modules::ics23_commitment::{CommitmentPrefix, CommitmentProofBytes};
    use relayer_modules::ics24_host::identifier::{ChainId, ChannelId, ClientId, ConnectionId, PortId};
    use relayer_modules::signer::Signer;

    use super::{
        channel_handshake_messages, connection_handshake_messages, ChannelSide, ConnectionSide,
    };
    use crate::chain::query::{
        ChannelResponse, ClientStateResponse, ConnectionResponse, ConsensusStateResponse,
    };
    use crate::msgs::IbcMessage;
    use crate::path::PathEnd;
    use crate::relay_msgs::{msg_action, RelayMsgs};

    const QUERY_HEIGHT: u64 = 40;
    const PROOF_HEIGHT: u64 = QUERY_HEIGHT + 1;

    fn test_header(height: u64) -> Header {
        let block = TestgenLightBlock::new_default(height).generate().unwrap();
        Header {
            signed_header: block.signed_header,
            validator_set: block.validators,
            next_validator_set: block.next_validators,
        }
    }

    fn path_end(chain: &str, client: &str, conn: &str, chan: &str) -> PathEnd {
        PathEnd {
            chain_id: chain.to_string(),
            client_id: client.to_string(),
            connection_id: conn.to_string(),
            channel_id: chan.to_string(),
            port_id: "transfer".to_string(),
        }
    }

    fn conn_response(state: ConnectionState, client: &str, remote_conn: &str) -> ConnectionResponse {
        ConnectionResponse {
            connection: ConnectionEnd::new(
                state,
                ClientId::from_str(client).unwrap(),
                ConnectionCounterparty::new(
                    ClientId::from_str(client).unwrap(),
                    Some(ConnectionId::from_str(remote_conn).unwrap()),
                    CommitmentPrefix::from("ibc"),
                ),
                vec!["1.0.0".to_string()],
            ),
            proof: CommitmentProofBytes::from(vec![0xAA, 0xBB]),
            proof_height: PROOF_HEIGHT,
        }
    }

    fn client_response(tracked_chain: &str, latest_height: u64) -> ClientStateResponse {
        ClientStateResponse {
            client_state: Some(ClientState::new(
                ChainId::from_str(tracked_chain).unwrap(),
                Duration::from_secs(336 * 60 * 60),
                Duration::from_secs(504 * 60 * 60),
                latest_height,
            )),
            proof: CommitmentProofBytes::from(vec![0xCC]),
            proof_height: PROOF_HEIGHT,
        }
    }

    fn chan_response(state: ChannelState) -> ChannelResponse {
        ChannelResponse {
            channel: ChannelEnd::new(
                state,
                Order::Ordered,
                ChannelCounterparty::new(
                    PortId::from_str("transfer").unwrap(),
                    Some(ChannelId::from_str("channelremote").unwrap()),
                ),
                vec![
                    ConnectionId::from_str("connectionaaa").unwrap(),
                    ConnectionId::from_str("connectionbbb").unwrap(),
                ],
                "1.0.0".to_string(),
            ),
            proof: CommitmentProofBytes::from(vec![0xDD]),
            proof_height: PROOF_HEIGHT,
        }
    }

    struct ConnFixture {
        path_a: PathEnd,
        path_b: PathEnd,
        header_a: Header,
        header_b: Header,
        client_a: ClientStateResponse,
        client_b: ClientStateResponse,
        cons: ConsensusStateResponse,
    }

    impl ConnFixture {
        fn new() -> Self {
            Self {
                path_a: path_end("chain-a", "clienttochainb", "connectionaaa", "channelaaaa"),
                path_b: path_end("chain-b", "clienttochaina", "connectionbbb", "channelbbbb"),
                header_a: test_header(QUERY_HEIGHT + 1),
                header_b: test_header(QUERY_HEIGHT + 1),
                client_a: client_response("chain-b", QUERY_HEIGHT),
                client_b: client_response("chain-a", QUERY_HEIGHT),
                cons: ConsensusStateResponse::absent(),
            }
        }

        fn sides(
            &self,
            state_a: ConnectionState,
            state_b: ConnectionState,
        ) -> (ConnectionResponse, ConnectionResponse) {
            (
                conn_response(state_a, "clienttochainb", "connectionbbb"),
                conn_response(state_b, "clienttochaina", "connectionaaa"),
            )
        }

        fn run(
            &self,
            state_a: ConnectionState,
            state_b: ConnectionState,
        ) -> RelayMsgs {
            let (conn_a, conn_b) = self.sides(state_a, state_b);
            let side_a = ConnectionSide {
                path: &self.path_a,
                header: &self.header_a,
                connection: &conn_a,
                client_state: &self.client_a,
                consensus_state: &self.cons,
                signer: Signer::new("cosmos1signeraaa"),
            };
            let side_b = ConnectionSide {
                path: &self.path_b,
                header: &self.header_b,
                connection: &conn_b,
                client_state: &self.client_b,
                consensus_state: &self.cons,
                signer: Signer::new("cosmos1signerbbb"),
            };

            connection_handshake_messages(&side_a, &side_b).unwrap()
        }

        fn run_swapped(
            &self,
            state_a: ConnectionState,
            state_b: ConnectionState,
        ) -> RelayMsgs {
            let (conn_a, conn_b) = self.sides(state_a, state_b);
            let side_a = ConnectionSide {
                path: &self.path_a,
                header: &self.header_a,
                connection: &conn_a,
                client_state: &self.client_a,
                consensus_state: &self.cons,
                signer: Signer::new("cosmos1signeraaa"),
            };
            let side_b = ConnectionSide {
                path: &self.path_b,
                header: &self.header_b,
                connection: &conn_b,
                client_state: &self.client_b,
                consensus_state: &self.cons,
                signer: Signer::new("cosmos1signerbbb"),
            };

            connection_handshake_messages(&side_b, &side_a).unwrap()
        }
    }

    use ConnectionState as C;

    #[test]
    fn engine_is_deterministic() {
        let fx = ConnFixture::new();
        let first = fx.run(C::Init, C::Uninitialized);
        let second = fx.run(C::Init, C::Uninitialized);
        assert_eq!(first, second);

        // byte-identical on the wire as well
        let first_bytes: Vec<_> = first.dst.iter().map(|m| m.to_any()).collect();
        let second_bytes: Vec<_> = second.dst.iter().map(|m| m.to_any()).collect();
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn open_open_is_quiescent() {
        let fx = ConnFixture::new();
        assert!(!fx.run(C::Open, C::Open).ready());
    }

    #[test]
    fn uninitialized_open_is_quiescent() {
        let fx = ConnFixture::new();
        assert!(!fx.run(C::Uninitialized, C::Open).ready());
        assert!(!fx.run(C::Open, C::Uninitialized).ready());
    }

    #[test]
    fn cold_start_inits_on_src() {
        let fx = ConnFixture::new();
        let msgs = fx.run(C::Uninitialized, C::Uninitialized);
        assert_eq!(msgs.src.len(), 1);
        assert!(msgs.dst.is_empty());
        assert_eq!(msg_action(&msgs.src), "connection_open_init");
    }

    #[test]
    fn engine_is_symmetric() {
        let fx = ConnFixture::new();

        for (state_a, state_b) in [
            (C::Init, C::Uninitialized),
            (C::TryOpen, C::Init),
            (C::Open, C::TryOpen),
        ] {
            let forward = fx.run(state_a, state_b);
            let mirrored = fx.run_swapped(state_a, state_b);

            // swapping the sides swaps the batch, message for message
            assert_eq!(forward.src, mirrored.dst);
            assert_eq!(forward.dst, mirrored.src);
        }
    }

    #[test]
    fn update_client_always_precedes_the_proof_bearing_message() {
        let fx = ConnFixture::new();

        for (state_a, state_b) in [
            (C::Uninitialized, C::Init),
            (C::Init, C::Uninitialized),
            (C::Init, C::TryOpen),
            (C::TryOpen, C::Init),
            (C::TryOpen, C::Open),
            (C::Open, C::TryOpen),
        ] {
            let msgs = fx.run(state_a, state_b);
            for batch in [&msgs.src, &msgs.dst] {
                if batch.len() >= 2 {
                    assert!(batch[0].is_update_client(), "({state_a:?}, {state_b:?})");
                }
            }
        }
    }

    #[test]
    fn proofs_carry_query_height_plus_one() {
        let fx = ConnFixture::new();

        let msgs = fx.run(C::Init, C::Uninitialized);
        match &msgs.dst[1] {
            IbcMessage::ConnOpenTry(m) => {
                assert_eq!(m.proof_height, QUERY_HEIGHT + 1);
                assert_eq!(m.consensus_height, QUERY_HEIGHT);
            }
            other => panic!("expected ConnOpenTry, got {:?}", other),
        }

        let msgs = fx.run(C::Init, C::TryOpen);
        match &msgs.src[1] {
            IbcMessage::ConnOpenAck(m) => assert_eq!(m.proof_height, QUERY_HEIGHT + 1),
            other => panic!("expected ConnOpenAck, got {:?}", other),
        }

        let msgs = fx.run(C::TryOpen, C::Open);
        match &msgs.src[1] {
            IbcMessage::ConnOpenConfirm(m) => assert_eq!(m.proof_height, QUERY_HEIGHT + 1),
            other => panic!("expected ConnOpenConfirm, got {:?}", other),
        }
    }

    #[test]
    fn cold_connection_transcript() {
        let fx = ConnFixture::new();

        // tick 1: nothing exists, init goes to chain a
        let msgs = fx.run(C::Uninitialized, C::Uninitialized);
        assert_eq!(msg_action(&msgs.src), "connection_open_init");

        // tick 2: a committed INIT, try goes to chain b
        let msgs = fx.run(C::Init, C::Uninitialized);
        assert!(msgs.src.is_empty());
        assert_eq!(msg_action(&msgs.dst), "connection_open_try");

        // tick 3: b committed TRYOPEN, ack goes back to a
        let msgs = fx.run(C::Init, C::TryOpen);
        assert!(msgs.dst.is_empty());
        assert_eq!(msg_action(&msgs.src), "connection_open_ack");

        // tick 4: a is OPEN, confirm goes to b
        let msgs = fx.run(C::Open, C::TryOpen);
        assert!(msgs.src.is_empty());
        assert_eq!(msg_action(&msgs.dst), "connection_open_confirm");

        // tick 5: both OPEN, the driver exits
        assert!(!fx.run(C::Open, C::Open).ready());
    }

    fn channel_sides<'a>(
        path_a: &'a PathEnd,
        path_b: &'a PathEnd,
        header: &'a Header,
        chan_a: &'a ChannelResponse,
        chan_b: &'a ChannelResponse,
    ) -> (ChannelSide<'a>, ChannelSide<'a>) {
        (
            ChannelSide {
                path: path_a,
                header,
                channel: chan_a,
                signer: Signer::new("cosmos1signeraaa"),
            },
            ChannelSide {
                path: path_b,
                header,
                channel: chan_b,
                signer: Signer::new("cosmos1signerbbb"),
            },
        )
    }

    use ChannelState as Ch;

    #[test]
    fn channel_cold_open_transcript() {
        let path_a = path_end("chain-a", "clienttochainb", "connectionaaa", "channelaaaa");
        let path_b = path_end("chain-b", "clienttochaina", "connectionbbb", "channelbbbb");
        let header = test_header(QUERY_HEIGHT + 1);

        let steps = [
            (Ch::Uninitialized, Ch::Uninitialized, "channel_open_init", true),
            (Ch::Init, Ch::Uninitialized, "channel_open_try", false),
            (Ch::Init, Ch::TryOpen, "channel_open_ack", true),
            (Ch::Open, Ch::TryOpen, "channel_open_confirm", false),
        ];

        for (state_a, state_b, action, on_src) in steps {
            let chan_a = chan_response(state_a);
            let chan_b = chan_response(state_b);
            let (side_a, side_b) = channel_sides(&path_a, &path_b, &header, &chan_a, &chan_b);

            let msgs = channel_handshake_messages(&side_a, &side_b, Order::Ordered).unwrap();
            let batch = if on_src { &msgs.src } else { &msgs.dst };
            let other = if on_src { &msgs.dst } else { &msgs.src };

            assert_eq!(msg_action(batch), action);
            assert!(other.is_empty());
            if batch.len() >= 2 {
                assert!(batch[0].is_update_client());
            }
        }

        // both OPEN: quiescence
        let chan_a = chan_response(Ch::Open);
        let chan_b = chan_response(Ch::Open);
        let (side_a, side_b) = channel_sides(&path_a, &path_b, &header, &chan_a, &chan_b);
        assert!(!channel_handshake_messages(&side_a, &side_b, Order::Ordered)
            .unwrap()
            .ready());
    }

    #[test]
    fn chan_init_hops_name_src_connection_first() {
        let path_a = path_end("chain-a", "clienttochainb", "connectionaaa", "channelaaaa");
        let path_b = path_end("chain-b", "clienttochaina", "connectionbbb", "channelbbbb");
        let header = test_header(QUERY_HEIGHT + 1);

        let chan_a = chan_response(Ch::Uninitialized);
        let chan_b = chan_response(Ch::Uninitialized);
        let (side_a, side_b) = channel_sides(&path_a, &path_b, &header, &chan_a, &chan_b);

        let msgs = channel_handshake_messages(&side_a, &side_b, Order::Ordered).unwrap();
        match &msgs.src[0] {
            IbcMessage::ChanOpenInit(m) => {
                let hops: Vec<String> =
                    m.channel.connection_hops.iter().map(|h| h.to_string()).collect();
                assert_eq!(hops, vec!["connectionaaa", "connectionbbb"]);
            }
            other => panic!("expected ChanOpenInit, got {:?}", other),
        }
    }
}
