//! # Canonical Endorsement Digest
//!
//! SHA-256 over a canonical tag-length-value encoding of (transaction id,
//! one namespace's effects). Entries are sorted by key per partition before
//! encoding; the reconciler's in-memory ordering never reaches the hash.

use prost::Message;
use sha2::{Digest as _, Sha256};
use shared_types::TxNamespace;

/// A 256-bit endorsement digest.
pub type Digest = [u8; 32];

#[derive(Clone, PartialEq, Message)]
struct Preimage {
    #[prost(string, tag = "1")]
    tx_id: String,
    #[prost(message, optional, tag = "2")]
    namespace: Option<PreimageNamespace>,
}

#[derive(Clone, PartialEq, Message)]
struct PreimageNamespace {
    #[prost(message, repeated, tag = "1")]
    reads: Vec<PreimageRead>,
    #[prost(message, repeated, tag = "2")]
    read_writes: Vec<PreimageWrite>,
    #[prost(message, repeated, tag = "3")]
    writes: Vec<PreimageWrite>,
}

#[derive(Clone, PartialEq, Message)]
struct PreimageRead {
    #[prost(bytes = "vec", tag = "1")]
    key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    version: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
struct PreimageWrite {
    #[prost(bytes = "vec", tag = "1")]
    key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    version: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    value: Vec<u8>,
}

/// Compute the endorsement digest of `tx_id` plus one namespace's effects.
///
/// Blind writes contribute their payload through the version slot and leave
/// the value slot empty; any change to a blind write's key or payload still
/// changes the digest.
pub fn endorsement_digest(tx_id: &str, ns: &TxNamespace) -> Digest {
    let mut reads: Vec<PreimageRead> = ns
        .reads_only
        .iter()
        .map(|r| PreimageRead {
            key: r.key.clone(),
            version: r.version.clone(),
        })
        .collect();
    reads.sort_by(|a, b| a.key.cmp(&b.key));

    let mut read_writes: Vec<PreimageWrite> = ns
        .read_writes
        .iter()
        .map(|rw| PreimageWrite {
            key: rw.key.clone(),
            version: rw.version.clone(),
            value: rw.value.clone(),
        })
        .collect();
    read_writes.sort_by(|a, b| a.key.cmp(&b.key));

    let mut writes: Vec<PreimageWrite> = ns
        .blind_writes
        .iter()
        .map(|w| PreimageWrite {
            key: w.key.clone(),
            version: w.value.clone(),
            value: Vec::new(),
        })
        .collect();
    writes.sort_by(|a, b| a.key.cmp(&b.key));

    let preimage = Preimage {
        tx_id: tx_id.to_string(),
        namespace: Some(PreimageNamespace {
            reads,
            read_writes,
            writes,
        }),
    };

    Sha256::digest(preimage.encode_to_vec()).into()
}
