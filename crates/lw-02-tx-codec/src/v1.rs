//! # Schema v1 Codec
//!
//! Namespace identifiers travel as numeric ids resolved through the lw-01
//! mapping cache. The standalone namespace key encoding is the varint of
//! the mapped id.

use crate::codec::TxCodec;
use crate::errors::CodecError;
use crate::wire::v1 as wire;
use lw_01_namespace_resolution::MappingService;
use prost::encoding::{decode_varint, encode_varint};
use prost::Message;
use shared_types::{NamespaceId, NamespacePolicy, Transaction, TxNamespace};
use std::sync::Arc;
use tracing::debug;

pub struct V1Codec {
    ns_mapper: Arc<dyn MappingService>,
}

impl V1Codec {
    pub fn new(ns_mapper: Arc<dyn MappingService>) -> Self {
        Self { ns_mapper }
    }

    fn map_namespace(&self, ns: &TxNamespace) -> Result<wire::TxNamespace, CodecError> {
        let ns_id = self.ns_mapper.id_by_name(&ns.ns_id)?;
        Ok(wire::TxNamespace {
            ns_id,
            ns_version: ns.ns_version.clone(),
            reads_only: ns.reads_only.iter().map(Into::into).collect(),
            read_writes: ns.read_writes.iter().map(Into::into).collect(),
            blind_writes: ns.blind_writes.iter().map(Into::into).collect(),
        })
    }

    fn unmap_namespace(&self, ns: wire::TxNamespace) -> Result<TxNamespace, CodecError> {
        let ns_id = self.ns_mapper.name_by_id(ns.ns_id)?;
        Ok(TxNamespace {
            ns_id,
            ns_version: ns.ns_version,
            reads_only: ns.reads_only.into_iter().map(Into::into).collect(),
            read_writes: ns.read_writes.into_iter().map(Into::into).collect(),
            blind_writes: ns.blind_writes.into_iter().map(Into::into).collect(),
        })
    }
}

impl TxCodec for V1Codec {
    fn serialize(&self, tx: Option<&Transaction>) -> Result<Vec<u8>, CodecError> {
        let Some(tx) = tx else {
            return Ok(Vec::new());
        };
        debug!(tx_id = %tx.id, namespaces = tx.namespaces.len(), "serializing v1 transaction");

        let namespaces = tx
            .namespaces
            .iter()
            .map(|ns| self.map_namespace(ns))
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

        let namespaces = msg
            .namespaces
            .into_iter()
            .map(|ns| self.unmap_namespace(ns))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Transaction {
            id: msg.id,
            namespaces,
            signatures: msg.signatures,
        })
    }

    fn encode_namespace_id(&self, ns_id: &str) -> Result<Vec<u8>, CodecError> {
        let id = self.ns_mapper.id_by_name(ns_id)?;
        let mut buf = Vec::with_capacity(5);
        encode_varint(u64::from(id), &mut buf);
        Ok(buf)
    }

    fn decode_namespace_id(&self, raw: &[u8]) -> Result<NamespaceId, CodecError> {
        let mut rest = raw;
        let value = decode_varint(&mut rest).map_err(CodecError::decode)?;
        if !rest.is_empty() {
            return Err(CodecError::DecodeFailure {
                reason: format!("namespace key has {} trailing bytes", rest.len()),
            });
        }
        let id = u32::try_from(value).map_err(|_| CodecError::DecodeFailure {
            reason: format!("namespace wire id {value} exceeds u32 range"),
        })?;
        Ok(self.ns_mapper.name_by_id(id)?)
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
