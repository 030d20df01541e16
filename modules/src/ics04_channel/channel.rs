use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ics04_channel::error::Error;
use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::proto::channel::{Channel as RawChannel, Counterparty as RawCounterparty};

/// The ICS-04 channel handshake states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Uninitialized = 0,
    Init = 1,
    TryOpen = 2,
    Open = 3,
    Closed = 4,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Parses the State from an i32 as carried on the wire. Unknown values
    /// collapse to `Uninitialized`.
    pub fn from_i32(nr: i32) -> Self {
        match nr {
            1 => Self::Init,
            2 => Self::TryOpen,
            3 => Self::Open,
            4 => Self::Closed,
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

/// Whether packets on a channel are relayed in sequence order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    None = 0,
    Unordered = 1,
    Ordered = 2,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Unordered => "UNORDERED",
            Self::Ordered => "ORDERED",
        }
    }

    pub fn from_i32(nr: i32) -> Self {
        match nr {
            1 => Self::Unordered,
            2 => Self::Ordered,
            _ => Self::None,
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNORDERED" => Ok(Self::Unordered),
            "ORDERED" => Ok(Self::Ordered),
            _ => Err(Error::unknown_ordering(s.to_string())),
        }
    }
}

/// The counterparty chain's port and channel for a channel end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub port_id: PortId,
    /// Unset until the counterparty has chosen its own channel id.
    pub channel_id: Option<ChannelId>,
}

impl Counterparty {
    pub fn new(port_id: PortId, channel_id: Option<ChannelId>) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }
}

impl TryFrom<RawCounterparty> for Counterparty {
    type Error = Error;

    fn try_from(raw: RawCounterparty) -> Result<Self, Self::Error> {
        let channel_id = if raw.channel_id.is_empty() {
            None
        } else {
            Some(ChannelId::from_str(&raw.channel_id).map_err(Error::invalid_identifier)?)
        };

        Ok(Counterparty {
            port_id: PortId::from_str(&raw.port_id).map_err(Error::invalid_identifier)?,
            channel_id,
        })
    }
}

impl From<Counterparty> for RawCounterparty {
    fn from(cp: Counterparty) -> Self {
        RawCounterparty {
            port_id: cp.port_id.to_string(),
            channel_id: cp.channel_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

/// One chain's end of a channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelEnd {
    pub state: State,
    pub ordering: Order,
    pub counterparty: Counterparty,
    pub connection_hops: Vec<ConnectionId>,
    pub version: String,
}

impl ChannelEnd {
    pub fn new(
        state: State,
        ordering: Order,
        counterparty: Counterparty,
        connection_hops: Vec<ConnectionId>,
        version: String,
    ) -> Self {
        Self {
            state,
            ordering,
            counterparty,
            connection_hops,
            version,
        }
    }

    /// The end an absent channel decodes to.
    pub fn uninitialized() -> Self {
        Self {
            state: State::Uninitialized,
            ordering: Order::None,
            counterparty: Counterparty::new(PortId::default(), None),
            connection_hops: Vec::new(),
            version: String::new(),
        }
    }

    pub fn state_matches(&self, other: State) -> bool {
        self.state == other
    }
}

impl TryFrom<RawChannel> for ChannelEnd {
    type Error = Error;

    fn try_from(raw: RawChannel) -> Result<Self, Self::Error> {
        let counterparty = raw.counterparty.ok_or_else(Error::missing_counterparty)?;

        let connection_hops = raw
            .connection_hops
            .into_iter()
            .map(|hop| ConnectionId::from_str(&hop).map_err(Error::invalid_identifier))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChannelEnd {
            state: State::from_i32(raw.state),
            ordering: Order::from_i32(raw.ordering),
            counterparty: Counterparty::try_from(counterparty)?,
            connection_hops,
            version: raw.version,
        })
    }
}

impl From<ChannelEnd> for RawChannel {
    fn from(end: ChannelEnd) -> Self {
        RawChannel {
            state: end.state as i32,
            ordering: end.ordering as i32,
            counterparty: Some(end.counterparty.into()),
            connection_hops: end
                .connection_hops
                .into_iter()
                .map(|hop| hop.to_string())
                .collect(),
            version: end.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;
    use std::str::FromStr;

    use super::{ChannelEnd, Counterparty, Order, RawChannel, State};
    use crate::ics24_host::identifier::{ChannelId, ConnectionId, PortId};

    #[test]
    fn order_parses_case_insensitively() {
        assert_eq!(Order::from_str("ordered").unwrap(), Order::Ordered);
        assert_eq!(Order::from_str("UNORDERED").unwrap(), Order::Unordered);
        assert!(Order::from_str("SIDEWAYS").is_err());
    }

    #[test]
    fn channel_end_round_trips_through_raw() {
        let end = ChannelEnd::new(
            State::Init,
            Order::Ordered,
            Counterparty::new(
                PortId::from_str("transfer").unwrap(),
                Some(ChannelId::from_str("channeltob").unwrap()),
            ),
            vec![
                ConnectionId::from_str("connectiontoa").unwrap(),
                ConnectionId::from_str("connectiontob").unwrap(),
            ],
            "1.0.0".to_string(),
        );

        let raw = RawChannel::from(end.clone());
        let parsed = ChannelEnd::try_from(raw).unwrap();
        assert_eq!(end, parsed);
    }

    #[test]
    fn closed_state_survives_the_wire() {
        let mut raw = RawChannel::from(ChannelEnd::uninitialized());
        raw.state = 4;
        assert_eq!(ChannelEnd::try_from(raw).unwrap().state, State::Closed);
    }
}
