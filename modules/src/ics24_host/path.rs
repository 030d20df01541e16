/// Path-space as listed in ICS-024
/// https://github.com/cosmos/ics/tree/master/spec/ics-024-host-requirements#path-space
/// Some of these are implemented in other ICSs, but ICS-024 has a nice summary table.
use std::fmt::{Display, Formatter, Result};

use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};

/// ABCI query path for the IBC store; proofs returned against it verify
/// membership in the `ibc` module's commitment tree.
pub const IBC_QUERY_PATH: &str = "store/ibc/key";

/// The Path enum abstracts out the different sub-paths
pub enum Path {
    ClientState(ClientId),
    ClientConsensusState { client_id: ClientId, height: u64 },
    Connections(ConnectionId),
    ChannelEnds(PortId, ChannelId),
    SeqSends(PortId, ChannelId),
    SeqRecvs(PortId, ChannelId),
    SeqAcks(PortId, ChannelId),
    Commitments {
        port_id: PortId,
        channel_id: ChannelId,
        sequence: u64,
    },
    Acks {
        port_id: PortId,
        channel_id: ChannelId,
        sequence: u64,
    },
}

impl Path {
    /// Indication if the path is provable.
    pub fn is_provable(&self) -> bool {
        true
    }

    /// into_bytes implementation
    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

/// The Display trait adds the `.to_string()` method to the Path struct.
/// This is where the different path strings are constructed.
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            Path::ClientState(client_id) => write!(f, "clients/{}/clientState", client_id),
            Path::ClientConsensusState { client_id, height } => {
                write!(f, "clients/{}/consensusState/{}", client_id, height)
            }
            Path::Connections(connection_id) => write!(f, "connections/{}", connection_id),
            Path::ChannelEnds(port_id, channel_id) => {
                write!(f, "channelEnds/ports/{}/channels/{}", port_id, channel_id)
            }
            Path::SeqSends(port_id, channel_id) => write!(
                f,
                "seqSends/ports/{}/channels/{}/nextSequenceSend",
                port_id, channel_id
            ),
            Path::SeqRecvs(port_id, channel_id) => write!(
                f,
                "seqRecvs/ports/{}/channels/{}/nextSequenceRecv",
                port_id, channel_id
            ),
            Path::SeqAcks(port_id, channel_id) => write!(
                f,
                "seqAcks/ports/{}/channels/{}/nextSequenceAck",
                port_id, channel_id
            ),
            Path::Commitments {
                port_id,
                channel_id,
                sequence,
            } => write!(
                f,
                "commitments/ports/{}/channels/{}/packets/{}",
                port_id, channel_id, sequence
            ),
            Path::Acks {
                port_id,
                channel_id,
                sequence,
            } => write!(
                f,
                "acks/ports/{}/channels/{}/acknowledgements/{}",
                port_id, channel_id, sequence
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Path;
    use crate::ics24_host::identifier::{ChannelId, ClientId, ConnectionId, PortId};

    #[test]
    fn path_strings_follow_ics24() {
        let client_id = ClientId::from_str("ibczeroclient").unwrap();
        let conn_id = ConnectionId::from_str("connectionidone").unwrap();
        let port_id = PortId::from_str("transfer").unwrap();
        let chan_id = ChannelId::from_str("channelzero").unwrap();

        assert_eq!(
            Path::ClientState(client_id.clone()).to_string(),
            "clients/ibczeroclient/clientState"
        );
        assert_eq!(
            Path::ClientConsensusState {
                client_id,
                height: 17,
            }
            .to_string(),
            "clients/ibczeroclient/consensusState/17"
        );
        assert_eq!(
            Path::Connections(conn_id).to_string(),
            "connections/connectionidone"
        );
        assert_eq!(
            Path::ChannelEnds(port_id.clone(), chan_id.clone()).to_string(),
            "channelEnds/ports/transfer/channels/channelzero"
        );
        assert_eq!(
            Path::Commitments {
                port_id,
                channel_id: chan_id,
                sequence: 5,
            }
            .into_bytes(),
            b"commitments/ports/transfer/channels/channelzero/packets/5".to_vec()
        );
    }
}
