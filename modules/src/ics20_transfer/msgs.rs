use crate::ics24_host::identifier::{ChannelId, PortId};
use crate::proto::cosmos::Coin;
use crate::proto::transfer::MsgTransfer as RawMsgTransfer;
use crate::signer::Signer;
use crate::tx_msg::Msg;

/// Initiate an ICS-20 token transfer on the sending chain. The packet itself
/// is produced by the chain's transfer module; the relayer later proves its
/// commitment to the destination.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgTransfer {
    pub source_port: PortId,
    pub source_channel: ChannelId,
    /// Destination-chain height used by the transfer module to compute the
    /// packet timeout.
    pub destination_height: u64,
    pub amount: Vec<Coin>,
    pub sender: Signer,
    pub receiver: Signer,
    /// True when the denomination carries no `port/channel/` prefix, i.e.
    /// the sending chain is the source of the tokens.
    pub source: bool,
}

impl Msg for MsgTransfer {
    type Raw = RawMsgTransfer;

    const TYPE_URL: &'static str = "/ibc.applications.transfer.v1.MsgTransfer";
}

impl From<MsgTransfer> for RawMsgTransfer {
    fn from(msg: MsgTransfer) -> Self {
        RawMsgTransfer {
            source_port: msg.source_port.to_string(),
            source_channel: msg.source_channel.to_string(),
            destination_height: msg.destination_height,
            amount: msg.amount,
            sender: msg.sender.to_string(),
            receiver: msg.receiver.to_string(),
            source: msg.source,
        }
    }
}
