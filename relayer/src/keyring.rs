//! Minimal test-backend key store.
//!
//! Keys live as JSON files under `<home>/keys/<chain-id>/<name>.json`,
//! holding the bech32 account string alongside the raw secp256k1 key pair.
//! HD derivation and bech32 encoding are handled by whatever provisioned the
//! key file; this store only loads, persists, and signs.

use std::fs;
use std::path::PathBuf;

use flex_error::{define_error, DisplayOnly};
use k256::ecdsa::{signature::Signer as _, Signature, SigningKey};
use serde::{Deserialize, Serialize};

use relayer_modules::ics24_host::identifier::ChainId;

define_error! {
    Error {
        Io
            { path: String }
            [ DisplayOnly<std::io::Error> ]
            |e| { format!("I/O error on key file {}", e.path) },

        KeyNotFound
            { name: String }
            |e| { format!("no key with name {}", e.name) },

        Encode
            [ DisplayOnly<serde_json::Error> ]
            |_| { "error encoding key file" },

        Decode
            [ DisplayOnly<serde_json::Error> ]
            |_| { "error decoding key file" },

        InvalidHexField
            { field: String }
            |e| { format!("key file field {} is not valid hex", e.field) },

        InvalidKey
            |_| { "invalid secp256k1 private key" },
    }
}

/// A key loaded from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEntry {
    /// Bech32 account address
    pub account: String,
    /// Compressed secp256k1 public key
    pub public_key: Vec<u8>,
    /// Raw secp256k1 private key
    pub private_key: Vec<u8>,
}

impl KeyEntry {
    /// Builds an entry from a raw private key, deriving the public key.
    pub fn from_private_key(account: impl Into<String>, private_key: &[u8]) -> Result<Self, Error> {
        let signing_key = SigningKey::from_bytes(private_key).map_err(|_| Error::invalid_key())?;
        let public_key = signing_key.verifying_key().to_bytes().to_vec();

        Ok(Self {
            account: account.into(),
            public_key,
            private_key: private_key.to_vec(),
        })
    }
}

/// On-disk representation of a key.
#[derive(Serialize, Deserialize)]
struct KeyFile {
    account: String,
    pubkey: String,
    privkey: String,
}

/// File-backed keyring in the test backend: no passphrase protection beyond
/// file permissions, one directory per chain.
#[derive(Clone, Debug)]
pub struct KeyRing {
    dir: PathBuf,
}

impl KeyRing {
    pub fn new(keys_dir: PathBuf, chain_id: &ChainId) -> Result<Self, Error> {
        let dir = keys_dir.join(chain_id.as_str());
        fs::create_dir_all(&dir)
            .map_err(|e| Error::io(dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    fn key_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    pub fn add_key(&self, name: &str, entry: KeyEntry) -> Result<(), Error> {
        let file = KeyFile {
            account: entry.account,
            pubkey: hex::encode(entry.public_key),
            privkey: hex::encode(entry.private_key),
        };

        let json = serde_json::to_string_pretty(&file).map_err(Error::encode)?;
        let path = self.key_path(name);
        fs::write(&path, json).map_err(|e| Error::io(path.display().to_string(), e))
    }

    pub fn get_key(&self, name: &str) -> Result<KeyEntry, Error> {
        let path = self.key_path(name);
        if !path.exists() {
            return Err(Error::key_not_found(name.to_string()));
        }

        let json =
            fs::read_to_string(&path).map_err(|e| Error::io(path.display().to_string(), e))?;
        let file: KeyFile = serde_json::from_str(&json).map_err(Error::decode)?;

        Ok(KeyEntry {
            account: file.account,
            public_key: hex::decode(&file.pubkey)
                .map_err(|_| Error::invalid_hex_field("pubkey".to_string()))?,
            private_key: hex::decode(&file.privkey)
                .map_err(|_| Error::invalid_hex_field("privkey".to_string()))?,
        })
    }

    /// Signs the message with the named key. The digest (SHA-256) is applied
    /// by the signer itself.
    pub fn sign_msg(&self, name: &str, msg: &[u8]) -> Result<Vec<u8>, Error> {
        let key = self.get_key(name)?;

        let signing_key =
            SigningKey::from_bytes(&key.private_key).map_err(|_| Error::invalid_key())?;
        let signature: Signature = signing_key.sign(msg);

        Ok(signature.as_ref().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use relayer_modules::ics24_host::identifier::ChainId;

    use super::{KeyEntry, KeyRing};

    fn test_keyring() -> (tempfile::TempDir, KeyRing) {
        let dir = tempfile::tempdir().unwrap();
        let chain_id = ChainId::from_str("test-chain").unwrap();
        let keyring = KeyRing::new(dir.path().to_path_buf(), &chain_id).unwrap();
        (dir, keyring)
    }

    #[test]
    fn add_then_get_round_trips() {
        let (_dir, keyring) = test_keyring();
        let entry = KeyEntry::from_private_key("cosmos1testaddr", &[7u8; 32]).unwrap();

        keyring.add_key("relayer", entry.clone()).unwrap();
        let loaded = keyring.get_key("relayer").unwrap();
        assert_eq!(entry, loaded);
    }

    #[test]
    fn missing_key_is_an_error() {
        let (_dir, keyring) = test_keyring();
        assert!(keyring.get_key("nope").is_err());
    }

    #[test]
    fn signing_is_deterministic() {
        let (_dir, keyring) = test_keyring();
        let entry = KeyEntry::from_private_key("cosmos1testaddr", &[9u8; 32]).unwrap();
        keyring.add_key("relayer", entry).unwrap();

        let a = keyring.sign_msg("relayer", b"payload").unwrap();
        let b = keyring.sign_msg("relayer", b"payload").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
