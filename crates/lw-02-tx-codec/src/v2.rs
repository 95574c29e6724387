//! # Schema v2 Codec
//!
//! Namespace identifiers travel as validated text; the meta-namespace is
//! substituted with its reserved wire literal in both directions. The
//! standalone namespace key encoding is the validated identifier's bytes.

use crate::codec::TxCodec;
use crate::errors::CodecError;
use crate::wire::v2 as wire;
use lw_01_namespace_resolution::{decode_namespace_id, encode_namespace_id, validate_namespace_id};
use prost::Message;
use shared_types::{NamespaceId, NamespacePolicy, Transaction, TxNamespace};
use tracing::debug;

#[derive(Default)]
pub struct V2Codec;

impl V2Codec {
    pub fn new() -> Self {
        Self
    }

    fn map_namespace(ns: &TxNamespace) -> Result<wire::TxNamespace, CodecError> {
        Ok(wire::TxNamespace {
            ns_id: encode_namespace_id(&ns.ns_id)?,
            ns_version: ns.ns_version.clone(),
            reads_only: ns.reads_only.iter().map(Into::into).collect(),
            read_writes: ns.read_writes.iter().map(Into::into).collect(),
            blind_writes: ns.blind_writes.iter().map(Into::into).collect(),
        })
    }

    fn unmap_namespace(ns: wire::TxNamespace) -> TxNamespace {
        TxNamespace {
            ns_id: decode_namespace_id(&ns.ns_id),
            ns_version: ns.ns_version,
            reads_only: ns.reads_only.into_iter().map(Into::into).collect(),
            read_writes: ns.read_writes.into_iter().map(Into::into).collect(),
            blind_writes: ns.blind_writes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TxCodec for V2Codec {
    fn serialize(&self, tx: Option<&Transaction>) -> Result<Vec<u8>, CodecError> {
        let Some(tx) = tx else {
            return Ok(Vec::new());
        };
        debug!(tx_id = %tx.id, namespaces = tx.namespaces.len(), "serializing v2 transaction");

        let namespaces = tx
            .namespaces
            .iter()
            .map(Self::map_namespace)
            .collect::<Result<Vec<_>, _>>()?;

        let msg = wire::Tx {
            id: tx.id.clone(),
            namespaces,
            signatures: tx.signatures.clone(),
        };
        Ok(msg.encode_to_vec())
    }

    fn deserialize(&self, raw: &[u8]) -> Result<Transaction, CodecError> {
        let msg = wire::Tx::decode(raw).map_err(CodecError::decode)?;

        Ok(Transaction {
            id: msg.id,
            namespaces: msg.namespaces.into_iter().map(Self::unmap_namespace).collect(),
            signatures: msg.signatures,
        })
    }

    fn encode_namespace_id(&self, ns_id: &str) -> Result<Vec<u8>, CodecError> {
        validate_namespace_id(ns_id)?;
        Ok(ns_id.as_bytes().to_vec())
    }

    fn decode_namespace_id(&self, raw: &[u8]) -> Result<NamespaceId, CodecError> {
        let text = std::str::from_utf8(raw).map_err(CodecError::decode)?;
        Ok(decode_namespace_id(text))
    }

    fn encode_namespace_policy(&self, policy: &NamespacePolicy) -> Result<Vec<u8>, CodecError> {
        Ok(wire::NamespacePolicy::from(policy).encode_to_vec())
    }

    fn decode_namespace_policy(&self, raw: &[u8]) -> Result<NamespacePolicy, CodecError> {
        let msg = wire::NamespacePolicy::decode(raw).map_err(CodecError::decode)?;
        Ok(msg.into())
    }

    fn is_status_valid(&self, status: u8) -> bool {
        i32::from(status) == wire::Status::Committed as i32
    }
}
