use prost::Message as ProstMessage;
use prost_types::Any;

/// A typed IBC message that can be packed into a transaction.
///
/// The raw counterpart carries the deterministic protobuf encoding; `to_any`
/// is the only way a message leaves the domain layer.
pub trait Msg: Clone {
    /// The raw prost representation of this message.
    type Raw: ProstMessage + From<Self> + Default;

    /// Fully qualified type URL under which the raw encoding travels.
    const TYPE_URL: &'static str;

    fn to_any(self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: Self::Raw::from(self).encode_to_vec(),
        }
    }
}
