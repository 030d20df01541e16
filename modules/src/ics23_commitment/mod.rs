//! ICS-23 commitment types: the prefix under which a chain stores its IBC
//! state, the commitment root carried in consensus states, and the opaque
//! proof bytes attached to proof-bearing messages.

use prost::Message as ProstMessage;
use serde::{Deserialize, Serialize};
use tendermint::merkle::proof::Proof;
use tendermint_proto::crypto::ProofOps as RawProofOps;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentPrefix(Vec<u8>);

impl CommitmentPrefix {
    pub fn new(prefix: Vec<u8>) -> Self {
        Self(prefix)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for CommitmentPrefix {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

/// Root of the counterparty's state tree; for Tendermint chains this is the
/// app hash of the block header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRoot(Vec<u8>);

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// Wire encoding of a Merkle proof, as returned by an ABCI query with
/// `prove = true` and consumed verbatim by the counterparty chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentProofBytes(Vec<u8>);

impl CommitmentProofBytes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Proof> for CommitmentProofBytes {
    fn from(proof: Proof) -> Self {
        let raw = RawProofOps::from(proof);
        Self(raw.encode_to_vec())
    }
}

impl From<Vec<u8>> for CommitmentProofBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
