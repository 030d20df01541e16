use std::convert::TryFrom;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ics04_channel::error::Error;
use crate::ics24_host::identifier::{ChannelId, PortId};
use crate::proto::channel::Packet as RawPacket;

/// A packet in flight between two chains.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub sequence: u64,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    pub data: Vec<u8>,
    pub timeout_height: u64,
    pub timeout_timestamp: u64,
}

impl From<Packet> for RawPacket {
    fn from(p: Packet) -> Self {
        RawPacket {
            sequence: p.sequence,
            source_port: p.source_port.to_string(),
            source_channel: p.source_channel.to_string(),
            destination_port: p.destination_port.to_string(),
            destination_channel: p.destination_channel.to_string(),
            data: p.data,
            timeout_height: p.timeout_height,
            timeout_timestamp: p.timeout_timestamp,
        }
    }
}

impl TryFrom<RawPacket> for Packet {
    type Error = Error;

    fn try_from(raw: RawPacket) -> Result<Self, Self::Error> {
        Ok(Packet {
            sequence: raw.sequence,
            source_port: PortId::from_str(&raw.source_port).map_err(Error::invalid_identifier)?,
            source_channel: ChannelId::from_str(&raw.source_channel)
                .map_err(Error::invalid_identifier)?,
            destination_port: PortId::from_str(&raw.destination_port)
                .map_err(Error::invalid_identifier)?,
            destination_channel: ChannelId::from_str(&raw.destination_channel)
                .map_err(Error::invalid_identifier)?,
            data: raw.data,
            timeout_height: raw.timeout_height,
            timeout_timestamp: raw.timeout_timestamp,
        })
    }
}
