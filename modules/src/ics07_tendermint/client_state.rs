use std::convert::TryFrom;
use std::str::FromStr;
use std::time::Duration;

use prost::Message as ProstMessage;
use prost_types::Any;
use serde::{Deserialize, Serialize};

use crate::ics07_tendermint::error::Error;
use crate::ics24_host::identifier::ChainId;
use crate::proto::client::ClientState as RawClientState;

pub const CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.tendermint.v1.ClientState";

/// State of an on-chain Tendermint light client: which chain it tracks, how
/// long its headers stay trustable, and the latest height it was updated to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientState {
    pub chain_id: ChainId,
    pub trusting_period: Duration,
    pub unbonding_period: Duration,
    pub latest_height: u64,
    /// Height at which the client was frozen due to misbehaviour; `None`
    /// while the client is active.
    pub frozen_height: Option<u64>,
}

impl ClientState {
    pub fn new(
        chain_id: ChainId,
        trusting_period: Duration,
        unbonding_period: Duration,
        latest_height: u64,
    ) -> Self {
        Self {
            chain_id,
            trusting_period,
            unbonding_period,
            latest_height,
            frozen_height: None,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_height.is_some()
    }

    pub fn to_any(self) -> Any {
        Any {
            type_url: CLIENT_STATE_TYPE_URL.to_string(),
            value: RawClientState::from(self).encode_to_vec(),
        }
    }
}

impl From<ClientState> for RawClientState {
    fn from(cs: ClientState) -> Self {
        RawClientState {
            chain_id: cs.chain_id.to_string(),
            trusting_period: cs.trusting_period.as_nanos() as u64,
            unbonding_period: cs.unbonding_period.as_nanos() as u64,
            latest_height: cs.latest_height,
            frozen_height: cs.frozen_height.unwrap_or(0),
        }
    }
}

impl TryFrom<RawClientState> for ClientState {
    type Error = Error;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        let chain_id =
            ChainId::from_str(&raw.chain_id).map_err(|e| Error::decode(e.to_string()))?;

        Ok(ClientState {
            chain_id,
            trusting_period: Duration::from_nanos(raw.trusting_period),
            unbonding_period: Duration::from_nanos(raw.unbonding_period),
            latest_height: raw.latest_height,
            frozen_height: match raw.frozen_height {
                0 => None,
                h => Some(h),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use std::str::FromStr;
    use std::time::Duration;

    use super::{ClientState, RawClientState};
    use crate::ics24_host::identifier::ChainId;

    #[test]
    fn client_state_round_trips_through_raw() {
        let cs = ClientState::new(
            ChainId::from_str("ibc-zero").unwrap(),
            Duration::from_secs(336 * 60 * 60),
            Duration::from_secs(504 * 60 * 60),
            42,
        );

        let raw = RawClientState::from(cs.clone());
        assert_eq!(raw.frozen_height, 0);

        let parsed = ClientState::try_from(raw).unwrap();
        assert_eq!(cs, parsed);
        assert!(!parsed.is_frozen());
    }
}
