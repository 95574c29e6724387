//! # Endorsement Verification
//!
//! A verifier checks an endorser's signature against the recomputed
//! endorsement digest. The signature scheme sits behind [`Verifier`] so the
//! policy layer can swap schemes per namespace.

use crate::digest::endorsement_digest;
use crate::errors::EndorsementError;
use ed25519_dalek::{Signature, VerifyingKey};
use shared_types::TxNamespace;
use tracing::debug;

/// Signature verification over arbitrary message bytes.
pub trait Verifier: Send + Sync {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

/// [`Verifier`] backed by an ed25519 verification key.
pub struct Ed25519Verifier {
    key: VerifyingKey,
}

impl Ed25519Verifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, EndorsementError> {
        let key = VerifyingKey::from_bytes(bytes).map_err(|e| {
            EndorsementError::MalformedMaterial {
                reason: e.to_string(),
            }
        })?;
        Ok(Self::new(key))
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(sig) = Signature::from_slice(signature) else {
            return false;
        };
        self.key.verify_strict(message, &sig).is_ok()
    }
}

/// Recompute the endorsement digest for `tx_id` plus `ns` and check
/// `signature` against it.
pub fn verify_endorsement(
    verifier: &dyn Verifier,
    tx_id: &str,
    ns: &TxNamespace,
    signature: &[u8],
) -> Result<(), EndorsementError> {
    debug!(%tx_id, ns_id = %ns.ns_id, "verifying endorsement");

    let digest = endorsement_digest(tx_id, ns);
    if !verifier.verify(&digest, signature) {
        return Err(EndorsementError::SignatureMismatch {
            tx_id: tx_id.to_string(),
        });
    }
    Ok(())
}
