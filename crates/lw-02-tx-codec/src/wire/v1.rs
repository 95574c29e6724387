//! Schema v1 wire messages: namespace ids are numeric.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct Tx {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, repeated, tag = "2")]
    pub namespaces: Vec<TxNamespace>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TxNamespace {
    #[prost(uint32, tag = "1")]
    pub ns_id: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub ns_version: Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub reads_only: Vec<Read>,
    #[prost(message, repeated, tag = "4")]
    pub read_writes: Vec<ReadWrite>,
    #[prost(message, repeated, tag = "5")]
    pub blind_writes: Vec<Write>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Read {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub version: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ReadWrite {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub version: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Write {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct NamespacePolicy {
    #[prost(string, tag = "1")]
    pub scheme: String,
    #[prost(bytes = "vec", tag = "2")]
    pub public_key: Vec<u8>,
}

/// Ledger validation codes of the v1 schema. Slot 0 is reserved for
/// "not yet validated".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Status {
    NotValidated = 0,
    Committed = 1,
    AbortedMvccConflict = 2,
    AbortedDuplicateTxid = 3,
}

impl From<&shared_types::Read> for Read {
    fn from(r: &shared_types::Read) -> Self {
        Self {
            key: r.key.clone(),
            version: r.version.clone(),
        }
    }
}

impl From<Read> for shared_types::Read {
    fn from(r: Read) -> Self {
        Self {
            key: r.key,
            version: r.version,
        }
    }
}

impl From<&shared_types::ReadWrite> for ReadWrite {
    fn from(rw: &shared_types::ReadWrite) -> Self {
        Self {
            key: rw.key.clone(),
            version: rw.version.clone(),
            value: rw.value.clone(),
        }
    }
}

impl From<ReadWrite> for shared_types::ReadWrite {
    fn from(rw: ReadWrite) -> Self {
        Self {
            key: rw.key,
            version: rw.version,
            value: rw.value,
        }
    }
}

impl From<&shared_types::Write> for Write {
    fn from(w: &shared_types::Write) -> Self {
        Self {
            key: w.key.clone(),
            value: w.value.clone(),
        }
    }
}

impl From<Write> for shared_types::Write {
    fn from(w: Write) -> Self {
        Self {
            key: w.key,
            value: w.value,
        }
    }
}

impl From<&shared_types::NamespacePolicy> for NamespacePolicy {
    fn from(p: &shared_types::NamespacePolicy) -> Self {
        Self {
            scheme: p.scheme.clone(),
            public_key: p.public_key.clone(),
        }
    }
}

impl From<NamespacePolicy> for shared_types::NamespacePolicy {
    fn from(p: NamespacePolicy) -> Self {
        Self {
            scheme: p.scheme,
            public_key: p.public_key,
        }
    }
}
