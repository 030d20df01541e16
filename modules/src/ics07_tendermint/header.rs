use std::convert::TryFrom;

use prost::Message as ProstMessage;
use prost_types::Any;
use serde::{Deserialize, Serialize};
use tendermint::block::signed_header::SignedHeader;
use tendermint::validator::Set as ValidatorSet;

use crate::ics07_tendermint::error::Error;
use crate::ics07_tendermint::ConsensusState;
use crate::ics24_host::identifier::ChainId;
use crate::proto::client::Header as RawHeader;

pub const HEADER_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.Header";

/// A header trusted by the local light client, in the form the on-chain
/// client consumes: the signed header plus the validator set that signed it
/// and the set taking over at the next height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub signed_header: SignedHeader,
    pub validator_set: ValidatorSet,
    pub next_validator_set: ValidatorSet,
}

impl Header {
    /// Height of the wrapped header.
    pub fn height(&self) -> u64 {
        self.signed_header.header.height.value()
    }

    /// Chain id claimed by the wrapped header.
    pub fn chain_id(&self) -> ChainId {
        self.signed_header.header.chain_id.clone().into()
    }

    /// The consensus state a client stores for this header.
    pub fn consensus_state(&self) -> ConsensusState {
        ConsensusState::from_header(&self.signed_header.header)
    }

    /// Checks that the header was produced by the expected chain. Everything
    /// deeper (commit signatures, validator hashes) has already been checked
    /// by the light client before the header entered the trusted store.
    pub fn validate_basic(&self, chain_id: &ChainId) -> Result<(), Error> {
        let got = self.signed_header.header.chain_id.as_str();
        if got != chain_id.as_str() {
            return Err(Error::invalid_chain_identifier(
                chain_id.to_string(),
                got.to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_any(self) -> Any {
        Any {
            type_url: HEADER_TYPE_URL.to_string(),
            value: RawHeader::from(self).encode_to_vec(),
        }
    }
}

impl From<Header> for RawHeader {
    fn from(h: Header) -> Self {
        RawHeader {
            signed_header: Some(h.signed_header.into()),
            validator_set: Some(h.validator_set.into()),
            next_validator_set: Some(h.next_validator_set.into()),
        }
    }
}

impl TryFrom<RawHeader> for Header {
    type Error = Error;

    fn try_from(raw: RawHeader) -> Result<Self, Self::Error> {
        let signed_header = raw
            .signed_header
            .ok_or_else(Error::missing_signed_header)?;
        let validator_set = raw
            .validator_set
            .ok_or_else(Error::missing_validator_set)?;
        let next_validator_set = raw
            .next_validator_set
            .ok_or_else(Error::missing_validator_set)?;

        Ok(Header {
            signed_header: SignedHeader::try_from(signed_header)
                .map_err(Error::invalid_raw_header)?,
            validator_set: ValidatorSet::try_from(validator_set)
                .map_err(Error::invalid_raw_header)?,
            next_validator_set: ValidatorSet::try_from(next_validator_set)
                .map_err(Error::invalid_raw_header)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use std::str::FromStr;

    use tendermint_testgen::light_block::TmLightBlock;
    use tendermint_testgen::{Generator, LightBlock as TestgenLightBlock};

    use super::{Header, RawHeader};
    use crate::ics24_host::identifier::ChainId;

    fn test_header(height: u64) -> Header {
        let block: TmLightBlock = TestgenLightBlock::new_default(height)
            .generate()
            .expect("testgen light block");

        Header {
            signed_header: block.signed_header,
            validator_set: block.validators,
            next_validator_set: block.next_validators,
        }
    }

    #[test]
    fn header_round_trips_through_raw() {
        let header = test_header(7);
        let raw = RawHeader::from(header.clone());
        let parsed = Header::try_from(raw).expect("raw header parses back");
        assert_eq!(header, parsed);
        assert_eq!(parsed.height(), 7);
    }

    #[test]
    fn validate_basic_checks_chain_id() {
        let header = test_header(3);
        let own = header.chain_id();
        assert!(header.validate_basic(&own).is_ok());

        let other = ChainId::from_str("other-chain").unwrap();
        assert!(header.validate_basic(&other).is_err());
    }
}
