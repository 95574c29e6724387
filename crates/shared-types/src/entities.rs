//! # Core Domain Entities
//!
//! The decoded transaction model shared by every subsystem: a transaction is
//! an ordered set of per-namespace partitions plus one signature per
//! namespace, positionally aligned.
//!
//! ## Clusters
//!
//! - **Transaction**: [`Transaction`], [`TxNamespace`], [`Read`],
//!   [`ReadWrite`], [`Write`]
//! - **Namespace control**: [`NamespacePolicy`], [`META_NAMESPACE`]
//! - **Block delivery**: [`Block`], [`TxOutcome`]

use serde::{Deserialize, Serialize};

/// A transaction identifier, opaque at this layer.
pub type TxId = String;

/// A human-readable namespace identifier.
pub type NamespaceId = String;

/// Position of a block in the ledger.
pub type BlockNumber = u64;

/// The reserved namespace holding namespace-to-policy bindings.
///
/// Every deployed namespace has a record in this namespace whose key is the
/// namespace's own wire id and whose value is its serialized
/// [`NamespacePolicy`]. The identifier is excluded from the usual namespace
/// character-class validation and must never collide with a user namespace.
pub const META_NAMESPACE: &str = "_meta";

/// A read observation: a key and the version it was read at.
///
/// An empty `version` means the key had never been written when it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Read {
    pub key: Vec<u8>,
    pub version: Vec<u8>,
}

impl Read {
    pub fn new(key: impl Into<Vec<u8>>, version: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            version: version.into(),
        }
    }
}

/// A key that is both read (at `version`) and written (to `value`) within
/// the same transaction namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadWrite {
    pub key: Vec<u8>,
    pub version: Vec<u8>,
    pub value: Vec<u8>,
}

impl ReadWrite {
    pub fn new(
        key: impl Into<Vec<u8>>,
        version: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            key: key.into(),
            version: version.into(),
            value: value.into(),
        }
    }
}

/// A blind write: a write to a key with no accompanying read of that key's
/// prior version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Write {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Write {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One namespace's effects within a transaction.
///
/// `ns_version` is the version the namespace currently carries, to be
/// superseded by this transaction.
///
/// Invariant: a key present in `read_writes` must not also appear in
/// `reads_only` or `blind_writes`. The reconciler produces partitions that
/// satisfy this by construction; [`TxNamespace::has_disjoint_partitions`]
/// checks it for transactions from other sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxNamespace {
    pub ns_id: NamespaceId,
    pub ns_version: Vec<u8>,
    pub reads_only: Vec<Read>,
    pub read_writes: Vec<ReadWrite>,
    pub blind_writes: Vec<Write>,
}

impl TxNamespace {
    pub fn new(
        ns_id: impl Into<NamespaceId>,
        ns_version: impl Into<Vec<u8>>,
        reads_only: Vec<Read>,
        read_writes: Vec<ReadWrite>,
        blind_writes: Vec<Write>,
    ) -> Self {
        Self {
            ns_id: ns_id.into(),
            ns_version: ns_version.into(),
            reads_only,
            read_writes,
            blind_writes,
        }
    }

    /// Check the partition disjointness invariant: no key of `read_writes`
    /// appears in `reads_only` or `blind_writes`.
    pub fn has_disjoint_partitions(&self) -> bool {
        self.read_writes.iter().all(|rw| {
            self.reads_only.iter().all(|r| r.key != rw.key)
                && self.blind_writes.iter().all(|w| w.key != rw.key)
        })
    }
}

/// A ledger transaction: identifier, ordered namespace partitions, and one
/// endorsement signature per namespace, positionally aligned.
///
/// Immutable once constructed; produced by a submitter, consumed by a codec,
/// verified by a verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TxId,
    pub namespaces: Vec<TxNamespace>,
    pub signatures: Vec<Vec<u8>>,
}

impl Transaction {
    pub fn new(id: impl Into<TxId>, namespaces: Vec<TxNamespace>, signatures: Vec<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            namespaces,
            signatures,
        }
    }
}

/// The endorsement policy of a namespace: a signature scheme identifier and
/// the serialized verification key authorized to endorse for it.
///
/// Stored as the value of the namespace's record in [`META_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespacePolicy {
    pub scheme: String,
    pub public_key: Vec<u8>,
}

impl NamespacePolicy {
    pub fn new(scheme: impl Into<String>, public_key: impl Into<Vec<u8>>) -> Self {
        Self {
            scheme: scheme.into(),
            public_key: public_key.into(),
        }
    }
}

/// A delivered block as seen by the status tracker: ordered transaction
/// envelopes with one validation status byte per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub number: BlockNumber,
    /// Serialized transaction envelopes, in commit order.
    pub envelopes: Vec<Vec<u8>>,
    /// One status byte per envelope slot, positionally aligned.
    pub status_filter: Vec<u8>,
}

/// The outcome of ledger validation for a committed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxOutcome {
    Valid,
    InvalidOtherReason,
}

impl TxOutcome {
    /// Map a codec validity decision onto an outcome.
    pub fn from_validity(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::InvalidOtherReason
        }
    }
}
