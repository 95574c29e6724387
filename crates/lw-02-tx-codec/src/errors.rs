//! Error types for the transaction codec.

use lw_01_namespace_resolution::NamespaceError;
use shared_types::SchemaVersion;
use thiserror::Error;

/// Errors that can occur while encoding or decoding transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The wire bytes are malformed; no partial result is produced.
    #[error("failed decoding wire bytes: {reason}")]
    DecodeFailure { reason: String },

    /// Namespace identifier resolution failed.
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    /// No codec is registered for the requested schema version.
    #[error("no codec registered for schema version [{0}]")]
    UnregisteredSchema(SchemaVersion),
}

impl CodecError {
    pub(crate) fn decode(err: impl std::fmt::Display) -> Self {
        Self::DecodeFailure {
            reason: err.to_string(),
        }
    }
}
