use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ics03_connection::error::Error;
use crate::ics23_commitment::CommitmentPrefix;
use crate::ics24_host::identifier::{ClientId, ConnectionId};
use crate::proto::connection::{
    ConnectionEnd as RawConnectionEnd, Counterparty as RawCounterparty,
    MerklePrefix as RawMerklePrefix,
};

/// The ICS-03 connection handshake states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Uninitialized = 0,
    Init = 1,
    TryOpen = 2,
    Open = 3,
}

impl State {
    /// Yields the State as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
        }
    }

    /// Parses the State from an i32 as carried on the wire. Unknown values
    /// collapse to `Uninitialized`.
    pub fn from_i32(nr: i32) -> Self {
        match nr {
            1 => Self::Init,
            2 => Self::TryOpen,
            3 => Self::Open,
            _ => Self::Uninitialized,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The counterparty chain's identifiers for a connection, together with the
/// prefix its proofs are evaluated under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub client_id: ClientId,
    /// Unset until the counterparty has chosen its own connection id
    /// (i.e. before `ConnOpenTry` lands there).
    pub connection_id: Option<ConnectionId>,
    pub prefix: CommitmentPrefix,
}

impl Counterparty {
    pub fn new(
        client_id: ClientId,
        connection_id: Option<ConnectionId>,
        prefix: CommitmentPrefix,
    ) -> Self {
        Self {
            client_id,
            connection_id,
            prefix,
        }
    }
}

impl TryFrom<RawCounterparty> for Counterparty {
    type Error = Error;

    fn try_from(raw: RawCounterparty) -> Result<Self, Self::Error> {
        let prefix = raw.prefix.ok_or_else(Error::missing_counterparty_prefix)?;

        let connection_id = if raw.connection_id.is_empty() {
            None
        } else {
            Some(
                ConnectionId::from_str(&raw.connection_id)
                    .map_err(Error::invalid_identifier)?,
            )
        };

        Ok(Counterparty {
            client_id: ClientId::from_str(&raw.client_id).map_err(Error::invalid_identifier)?,
            connection_id,
            prefix: CommitmentPrefix::new(prefix.key_prefix),
        })
    }
}

impl From<Counterparty> for RawCounterparty {
    fn from(cp: Counterparty) -> Self {
        RawCounterparty {
            client_id: cp.client_id.to_string(),
            connection_id: cp
                .connection_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            prefix: Some(RawMerklePrefix {
                key_prefix: cp.prefix.into_vec(),
            }),
        }
    }
}

/// One chain's end of a connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionEnd {
    pub state: State,
    pub client_id: ClientId,
    pub counterparty: Counterparty,
    pub versions: Vec<String>,
}

impl ConnectionEnd {
    pub fn new(
        state: State,
        client_id: ClientId,
        counterparty: Counterparty,
        versions: Vec<String>,
    ) -> Self {
        Self {
            state,
            client_id,
            counterparty,
            versions,
        }
    }

    /// The end an absent connection decodes to: queries against a connection
    /// id that has not been claimed yet yield this rather than an error.
    pub fn uninitialized() -> Self {
        Self {
            state: State::Uninitialized,
            client_id: ClientId::default(),
            counterparty: Counterparty::new(ClientId::default(), None, CommitmentPrefix::from("ibc")),
            versions: Vec::new(),
        }
    }

    pub fn state_matches(&self, other: State) -> bool {
        self.state == other
    }
}

impl TryFrom<RawConnectionEnd> for ConnectionEnd {
    type Error = Error;

    fn try_from(raw: RawConnectionEnd) -> Result<Self, Self::Error> {
        let counterparty = raw.counterparty.ok_or_else(Error::missing_counterparty)?;

        Ok(ConnectionEnd {
            state: State::from_i32(raw.state),
            client_id: ClientId::from_str(&raw.client_id).map_err(Error::invalid_identifier)?,
            counterparty: Counterparty::try_from(counterparty)?,
            versions: raw.versions,
        })
    }
}

impl From<ConnectionEnd> for RawConnectionEnd {
    fn from(end: ConnectionEnd) -> Self {
        RawConnectionEnd {
            client_id: end.client_id.to_string(),
            versions: end.versions,
            state: end.state as i32,
            counterparty: Some(end.counterparty.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use std::str::FromStr;

    use super::{ConnectionEnd, Counterparty, RawConnectionEnd, State};
    use crate::ics23_commitment::CommitmentPrefix;
    use crate::ics24_host::identifier::{ClientId, ConnectionId};

    #[test]
    fn state_wire_values_round_trip() {
        for state in [State::Uninitialized, State::Init, State::TryOpen, State::Open] {
            assert_eq!(State::from_i32(state as i32), state);
        }
        // unknown values collapse to Uninitialized
        assert_eq!(State::from_i32(42), State::Uninitialized);
    }

    #[test]
    fn connection_end_round_trips_through_raw() {
        let end = ConnectionEnd::new(
            State::TryOpen,
            ClientId::from_str("clienttoa").unwrap(),
            Counterparty::new(
                ClientId::from_str("clienttob").unwrap(),
                Some(ConnectionId::from_str("connectiontob").unwrap()),
                CommitmentPrefix::from("ibc"),
            ),
            vec!["1.0.0".to_string()],
        );

        let raw = RawConnectionEnd::from(end.clone());
        let parsed = ConnectionEnd::try_from(raw).unwrap();
        assert_eq!(end, parsed);
    }

    #[test]
    fn empty_counterparty_connection_id_is_none() {
        let mut raw = RawConnectionEnd::from(ConnectionEnd::uninitialized());
        raw.state = 1;
        let parsed = ConnectionEnd::try_from(raw).unwrap();
        assert_eq!(parsed.state, State::Init);
        assert_eq!(parsed.counterparty.connection_id, None);
    }
}
