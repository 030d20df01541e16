//! The per-round message batch and its submission.
//!
//! A relay round produces messages for either side of a path; `send`
//! attempts both sides even when the first fails, since partial progress is
//! picked up by the next round's fresh queries.

use tracing::info;

use crate::chain::{Chain, TxResponse};
use crate::error::Error;
use crate::msgs::IbcMessage;
use crate::sdk_error::sdk_error_from_code;

/// The msgs that need to be sent to both a src and dst chain after a given
/// relay round.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelayMsgs {
    pub src: Vec<IbcMessage>,
    pub dst: Vec<IbcMessage>,
}

impl RelayMsgs {
    /// Returns true if there are messages to relay.
    pub fn ready(&self) -> bool {
        !self.src.is_empty() || !self.dst.is_empty()
    }

    /// Submits the batches to their chains. Both sides are attempted; the
    /// first failure is returned after both submissions settle.
    pub fn send(&self, src: &Chain, dst: &Chain) -> Result<(), Error> {
        let mut out = Ok(());

        if !self.src.is_empty() {
            match src.send_msgs(&self.src) {
                Ok(res) if res.is_ok() => src.log_success_tx(&res, &self.src),
                Ok(res) => {
                    src.log_failed_tx(&res, &self.src);
                    out = Err(Error::deliver_tx(
                        src.id().to_string(),
                        res.code,
                        res.codespace,
                    ));
                }
                Err(e) => out = Err(e),
            }
        }

        if !self.dst.is_empty() {
            match dst.send_msgs(&self.dst) {
                Ok(res) if res.is_ok() => dst.log_success_tx(&res, &self.dst),
                Ok(res) => {
                    dst.log_failed_tx(&res, &self.dst);
                    if out.is_ok() {
                        out = Err(Error::deliver_tx(
                            dst.id().to_string(),
                            res.code,
                            res.codespace,
                        ));
                    }
                }
                Err(e) => {
                    if out.is_ok() {
                        out = Err(e);
                    }
                }
            }
        }

        out
    }
}

/// The action tag for a batch: the type of the last message, by the
/// convention that a proof-bearing message follows its client update.
pub fn msg_action(msgs: &[IbcMessage]) -> &'static str {
    match msgs {
        [only] => only.action(),
        [_, second] => second.action(),
        _ => "",
    }
}

impl Chain {
    /// Logs a committed transaction.
    pub fn log_success_tx(&self, res: &TxResponse, msgs: &[IbcMessage]) {
        info!(
            "✔ [{}]@{{{}}} - msg({})",
            self.id(),
            res.height,
            msg_action(msgs)
        );
    }

    /// Logs a rejected transaction, resolving the codespace and code to a
    /// readable message.
    pub fn log_failed_tx(&self, res: &TxResponse, msgs: &[IbcMessage]) {
        let detail = sdk_error_from_code(&res.codespace, res.code);
        info!(
            "✘ [{}]@{{{}}} - msg({}) err({}: {})",
            self.id(),
            res.height,
            msg_action(msgs),
            res.codespace,
            detail
        );
    }
}

#[cfg(test)]
mod tests {
    use relayer_modules::ics04_channel::msgs::MsgChannelCloseInit;
    use relayer_modules::ics24_host::identifier::{ChannelId, PortId};
    use relayer_modules::signer::Signer;

    use super::{msg_action, RelayMsgs};
    use crate::msgs::IbcMessage;

    fn close_init() -> IbcMessage {
        IbcMessage::ChanCloseInit(MsgChannelCloseInit {
            port_id: PortId::default(),
            channel_id: ChannelId::default(),
            signer: Signer::new("cosmos1test"),
        })
    }

    #[test]
    fn ready_iff_either_side_nonempty() {
        let mut msgs = RelayMsgs::default();
        assert!(!msgs.ready());

        msgs.src.push(close_init());
        assert!(msgs.ready());

        let mut msgs = RelayMsgs::default();
        msgs.dst.push(close_init());
        assert!(msgs.ready());
    }

    #[test]
    fn action_is_last_or_only_message() {
        assert_eq!(msg_action(&[close_init()]), "channel_close_init");
        assert_eq!(msg_action(&[close_init(), close_init()]), "channel_close_init");
        assert_eq!(msg_action(&[]), "");
    }
}
