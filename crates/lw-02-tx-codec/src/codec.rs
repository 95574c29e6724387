//! # Codec Contract and Registry
//!
//! [`TxCodec`] is the single contract both schema variants implement; the
//! [`CodecRegistry`] resolves an out-of-band schema tag to the registered
//! codec instance.

use crate::errors::CodecError;
use shared_types::{NamespaceId, NamespacePolicy, SchemaVersion, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

/// Schema-versioned transaction codec.
///
/// Implementations are stateless with respect to callers: every method is
/// reentrant and safe to call concurrently.
pub trait TxCodec: Send + Sync {
    /// Encode a transaction into its canonical wire bytes.
    ///
    /// An absent transaction encodes to an empty byte vector, not an error.
    fn serialize(&self, tx: Option<&Transaction>) -> Result<Vec<u8>, CodecError>;

    /// Decode wire bytes into a transaction.
    ///
    /// Malformed bytes fail with [`CodecError::DecodeFailure`] and produce
    /// no partial result.
    fn deserialize(&self, raw: &[u8]) -> Result<Transaction, CodecError>;

    /// Encode a namespace identifier as a standalone byte key, for when the
    /// namespace itself is addressed as a key in the meta-namespace.
    fn encode_namespace_id(&self, ns_id: &str) -> Result<Vec<u8>, CodecError>;

    /// Decode a standalone namespace byte key back to its identifier.
    fn decode_namespace_id(&self, raw: &[u8]) -> Result<NamespaceId, CodecError>;

    /// Encode a namespace policy into its wire bytes.
    fn encode_namespace_policy(&self, policy: &NamespacePolicy) -> Result<Vec<u8>, CodecError>;

    /// Decode namespace policy wire bytes.
    fn decode_namespace_policy(&self, raw: &[u8]) -> Result<NamespacePolicy, CodecError>;

    /// Whether a block-metadata status byte marks a committed transaction.
    fn is_status_valid(&self, status: u8) -> bool;
}

/// Registry of codec instances keyed by schema version.
///
/// Registration happens once at wiring time; lookups are read-only
/// afterwards. The registered variants share no mutable state.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: HashMap<SchemaVersion, Arc<dyn TxCodec>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, version: SchemaVersion, codec: Arc<dyn TxCodec>) -> Self {
        self.codecs.insert(version, codec);
        self
    }

    pub fn get(&self, version: SchemaVersion) -> Result<Arc<dyn TxCodec>, CodecError> {
        self.codecs
            .get(&version)
            .cloned()
            .ok_or(CodecError::UnregisteredSchema(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::V2Codec;

    #[test]
    fn test_registry_lookup() {
        let registry =
            CodecRegistry::new().register(SchemaVersion::V2, Arc::new(V2Codec::new()));

        assert!(registry.get(SchemaVersion::V2).is_ok());
        assert_eq!(
            registry.get(SchemaVersion::V1).err(),
            Some(CodecError::UnregisteredSchema(SchemaVersion::V1))
        );
    }
}
