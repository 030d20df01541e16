use std::convert::TryFrom;

use prost::Message as ProstMessage;
use prost_types::Any;
use serde::{Deserialize, Serialize};
use tendermint::block::Header as TmHeader;
use tendermint::{Hash, Time};

use crate::ics07_tendermint::error::Error;
use crate::ics23_commitment::CommitmentRoot;
use crate::proto::client::ConsensusState as RawConsensusState;

pub const CONSENSUS_STATE_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.ConsensusState";

/// The slice of a header an on-chain client stores per height: enough to
/// verify Merkle proofs against (the root) and to verify the next header
/// (timestamp and next validators hash).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsensusState {
    pub timestamp: Time,
    pub root: CommitmentRoot,
    pub next_validators_hash: Hash,
}

impl ConsensusState {
    pub fn from_header(header: &TmHeader) -> Self {
        Self {
            timestamp: header.time,
            root: CommitmentRoot::from_bytes(&header.app_hash.value()),
            next_validators_hash: header.next_validators_hash,
        }
    }

    pub fn to_any(self) -> Any {
        Any {
            type_url: CONSENSUS_STATE_TYPE_URL.to_string(),
            value: RawConsensusState::from(self).encode_to_vec(),
        }
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(cs: ConsensusState) -> Self {
        let nanos = cs
            .timestamp
            .duration_since(Time::unix_epoch())
            .map(|d| d.as_nanos() as i64)
            .unwrap_or_default();

        RawConsensusState {
            timestamp: nanos,
            root: cs.root.into_vec(),
            next_validators_hash: cs.next_validators_hash.as_bytes().to_vec(),
        }
    }
}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = Error;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        let secs = raw.timestamp / 1_000_000_000;
        let nanos = (raw.timestamp % 1_000_000_000) as u32;
        let timestamp = Time::from_unix_timestamp(secs, nanos)
            .map_err(|e| Error::invalid_timestamp(e.to_string()))?;

        let next_validators_hash =
            Hash::from_bytes(tendermint::hash::Algorithm::Sha256, &raw.next_validators_hash)
                .map_err(|e| Error::decode(e.to_string()))?;

        Ok(ConsensusState {
            timestamp,
            root: CommitmentRoot::from_bytes(&raw.root),
            next_validators_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use tendermint_testgen::{Generator, LightBlock as TestgenLightBlock};

    use super::{ConsensusState, RawConsensusState};

    #[test]
    fn consensus_state_round_trips_through_raw() {
        let block = TestgenLightBlock::new_default(11).generate().unwrap();
        let cs = ConsensusState::from_header(&block.signed_header.header);

        let raw = RawConsensusState::from(cs.clone());
        let parsed = ConsensusState::try_from(raw).unwrap();
        assert_eq!(cs, parsed);
    }
}
