//! Error types for endorsement verification.

use thiserror::Error;

/// Errors that can occur while verifying an endorsement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndorsementError {
    /// The signature does not verify against the recomputed digest. This is
    /// a verification failure, not a codec error.
    #[error("endorsement signature does not match digest for tx [{tx_id}]")]
    SignatureMismatch { tx_id: String },

    /// The verification key or signature bytes are structurally invalid.
    #[error("malformed verification material: {reason}")]
    MalformedMaterial { reason: String },
}
