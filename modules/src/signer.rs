use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Bech32-encoded account address carried in every message's `signer` field.
///
/// Address derivation and bech32 parsing live with the keyring; a `Signer`
/// is treated as an opaque, already-valid string here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signer(String);

impl Signer {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Signer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
