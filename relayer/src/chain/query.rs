//! Proof-aware queries against the IBC store.
//!
//! Every provable query executed at height `h` reads the state as of `h`
//! and reports `proof_height = h + 1`: Tendermint commits the state root
//! for height `n` in the header at `n + 1`, so that is the height the
//! counterparty must verify the proof at. Callers that will submit a proof
//! alongside a client update must therefore query at `lite_height - 1`.

use std::convert::TryFrom;
use std::str::FromStr;

use prost::Message as ProstMessage;
use prost_types::Any;
use tendermint::abci::Path as TendermintABCIPath;

use relayer_modules::ics03_connection::ConnectionEnd;
use relayer_modules::ics04_channel::ChannelEnd;
use relayer_modules::ics07_tendermint::{ClientState, ConsensusState};
use relayer_modules::ics23_commitment::CommitmentProofBytes;
use relayer_modules::ics24_host::{Path, IBC_QUERY_PATH};
use relayer_modules::proto::channel::Channel as RawChannel;
use relayer_modules::proto::client::{
    ClientState as RawClientState, ConsensusState as RawConsensusState,
};
use relayer_modules::proto::connection::ConnectionEnd as RawConnectionEnd;

use crate::chain::Chain;
use crate::error::Error;
use crate::util::join_pair;

/// Raw result of an ABCI query: the value at the queried height, the
/// optional proof, and the height the value was read at.
#[derive(Clone, Debug)]
pub struct QueryResponse {
    pub value: Vec<u8>,
    pub proof: Option<CommitmentProofBytes>,
    pub height: u64,
}

#[derive(Clone, Debug)]
pub struct ConnectionResponse {
    pub connection: ConnectionEnd,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

#[derive(Clone, Debug)]
pub struct ChannelResponse {
    pub channel: ChannelEnd,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

#[derive(Clone, Debug)]
pub struct ClientStateResponse {
    /// `None` when no client with the configured id exists on the chain.
    pub client_state: Option<ClientState>,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

#[derive(Clone, Debug)]
pub struct ConsensusStateResponse {
    pub consensus_state: Option<ConsensusState>,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

impl ConsensusStateResponse {
    /// Placeholder for sides whose client does not exist yet; consumed only
    /// by handshake arms that cannot legally need it.
    pub fn absent() -> Self {
        Self {
            consensus_state: None,
            proof: CommitmentProofBytes::default(),
            proof_height: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PacketCommitmentResponse {
    pub commitment: Vec<u8>,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

#[derive(Clone, Debug)]
pub struct SequenceResponse {
    pub sequence: u64,
    pub proof: CommitmentProofBytes,
    pub proof_height: u64,
}

fn ibc_query_path() -> TendermintABCIPath {
    TendermintABCIPath::from_str(IBC_QUERY_PATH).expect("static query path parses")
}

fn decode_sequence(value: &[u8]) -> Result<u64, Error> {
    let bytes: [u8; 8] = value.try_into().map_err(|_| Error::empty_response_value())?;
    Ok(u64::from_be_bytes(bytes))
}

impl Chain {
    /// Queries this chain's end of the configured connection. An absent
    /// connection decodes to the `Uninitialized` end with a proof of
    /// absence rather than an error.
    pub fn query_connection(&self, height: u64) -> Result<ConnectionResponse, Error> {
        let connection_id = self.path_end()?.connection_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::Connections(connection_id).into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        let connection = if res.value.is_empty() {
            ConnectionEnd::uninitialized()
        } else {
            let raw = RawConnectionEnd::decode(res.value.as_slice()).map_err(Error::decode)?;
            ConnectionEnd::try_from(raw).map_err(Error::ics03)?
        };

        Ok(ConnectionResponse {
            connection,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries this chain's end of the configured channel.
    pub fn query_channel(&self, height: u64) -> Result<ChannelResponse, Error> {
        let path_end = self.path_end()?;
        let port_id = path_end.port_id()?;
        let channel_id = path_end.channel_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::ChannelEnds(port_id, channel_id).into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        let channel = if res.value.is_empty() {
            ChannelEnd::uninitialized()
        } else {
            let raw = RawChannel::decode(res.value.as_slice()).map_err(Error::decode)?;
            ChannelEnd::try_from(raw).map_err(Error::ics04)?
        };

        Ok(ChannelResponse {
            channel,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries the state of the client this chain keeps for its
    /// counterparty.
    pub fn query_client_state(&self, height: u64) -> Result<ClientStateResponse, Error> {
        let client_id = self.path_end()?.client_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::ClientState(client_id).into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        let client_state = if res.value.is_empty() {
            None
        } else {
            let any = Any::decode(res.value.as_slice()).map_err(Error::decode)?;
            let raw = RawClientState::decode(any.value.as_slice()).map_err(Error::decode)?;
            Some(ClientState::try_from(raw).map_err(Error::ics07)?)
        };

        Ok(ClientStateResponse {
            client_state,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries the consensus state this chain's client stored at
    /// `consensus_height`, with a proof taken at `query_height`.
    pub fn query_client_consensus(
        &self,
        query_height: u64,
        consensus_height: u64,
    ) -> Result<ConsensusStateResponse, Error> {
        let client_id = self.path_end()?.client_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::ClientConsensusState {
                client_id,
                height: consensus_height,
            }
            .into_bytes(),
            query_height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        let consensus_state = if res.value.is_empty() {
            None
        } else {
            let any = Any::decode(res.value.as_slice()).map_err(Error::decode)?;
            let raw = RawConsensusState::decode(any.value.as_slice()).map_err(Error::decode)?;
            Some(ConsensusState::try_from(raw).map_err(Error::ics07)?)
        };

        Ok(ConsensusStateResponse {
            consensus_state,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries the commitment this chain stored for the packet with the
    /// given sequence.
    pub fn query_packet_commitment(
        &self,
        height: u64,
        sequence: u64,
    ) -> Result<PacketCommitmentResponse, Error> {
        let path_end = self.path_end()?;
        let port_id = path_end.port_id()?;
        let channel_id = path_end.channel_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::Commitments {
                port_id,
                channel_id,
                sequence,
            }
            .into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        if res.value.is_empty() {
            return Err(Error::empty_response_value());
        }

        Ok(PacketCommitmentResponse {
            commitment: res.value,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries the next sequence number this chain will assign to a sent
    /// packet.
    pub fn query_next_seq_send(&self, height: u64) -> Result<SequenceResponse, Error> {
        let path_end = self.path_end()?;
        let port_id = path_end.port_id()?;
        let channel_id = path_end.channel_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::SeqSends(port_id, channel_id).into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        Ok(SequenceResponse {
            sequence: decode_sequence(&res.value)?,
            proof,
            proof_height: res.height + 1,
        })
    }

    /// Queries the next packet sequence this chain expects to receive.
    pub fn query_next_seq_recv(&self, height: u64) -> Result<SequenceResponse, Error> {
        let path_end = self.path_end()?;
        let port_id = path_end.port_id()?;
        let channel_id = path_end.channel_id()?;

        let res = self.abci_query(
            ibc_query_path(),
            Path::SeqRecvs(port_id, channel_id).into_bytes(),
            height,
            true,
        )?;

        let proof = res.proof.ok_or_else(Error::empty_response_proof)?;

        Ok(SequenceResponse {
            sequence: decode_sequence(&res.value)?,
            proof,
            proof_height: res.height + 1,
        })
    }
}

fn annotate(chain: &Chain) -> impl Fn(Error) -> Error + '_ {
    move |e| Error::chain_query(chain.id().to_string(), e.to_string())
}

/// Queries both connection ends in parallel; a single side failing fails
/// the pair.
pub fn query_connection_pair(
    src: &Chain,
    dst: &Chain,
    src_height: u64,
    dst_height: u64,
) -> Result<(ConnectionResponse, ConnectionResponse), Error> {
    join_pair(
        || src.query_connection(src_height).map_err(annotate(src)),
        || dst.query_connection(dst_height).map_err(annotate(dst)),
    )
}

/// Queries both channel ends in parallel.
pub fn query_channel_pair(
    src: &Chain,
    dst: &Chain,
    src_height: u64,
    dst_height: u64,
) -> Result<(ChannelResponse, ChannelResponse), Error> {
    join_pair(
        || src.query_channel(src_height).map_err(annotate(src)),
        || dst.query_channel(dst_height).map_err(annotate(dst)),
    )
}

/// Queries both client states in parallel.
pub fn query_client_state_pair(
    src: &Chain,
    dst: &Chain,
    src_height: u64,
    dst_height: u64,
) -> Result<(ClientStateResponse, ClientStateResponse), Error> {
    join_pair(
        || src.query_client_state(src_height).map_err(annotate(src)),
        || dst.query_client_state(dst_height).map_err(annotate(dst)),
    )
}

/// Queries both stored consensus states in parallel, each at its own
/// `(query height, consensus height)` pair.
pub fn query_client_consensus_pair(
    src: &Chain,
    dst: &Chain,
    src_heights: (u64, u64),
    dst_heights: (u64, u64),
) -> Result<(ConsensusStateResponse, ConsensusStateResponse), Error> {
    join_pair(
        || {
            src.query_client_consensus(src_heights.0, src_heights.1)
                .map_err(annotate(src))
        },
        || {
            dst.query_client_consensus(dst_heights.0, dst_heights.1)
                .map_err(annotate(dst))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::decode_sequence;

    #[test]
    fn sequences_decode_from_big_endian() {
        assert_eq!(decode_sequence(&7u64.to_be_bytes()).unwrap(), 7);
        assert!(decode_sequence(&[1, 2, 3]).is_err());
        assert!(decode_sequence(&[]).is_err());
    }
}
