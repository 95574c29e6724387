//! # Endorsement Hashing Subsystem (lw-04)
//!
//! The endorsement digest is the message an endorser signs and a verifier
//! checks: a 256-bit hash over a transaction id and the effects of exactly
//! one of its namespaces.
//!
//! ## Determinism
//!
//! The digest preimage is a canonical tag-length-value encoding with every
//! partition sorted by key, so two semantically identical namespace
//! partitions hash identically regardless of the order the reconciler
//! emitted their entries in.

pub mod digest;
pub mod errors;
pub mod verify;

pub use digest::{endorsement_digest, Digest};
pub use errors::EndorsementError;
pub use verify::{verify_endorsement, Ed25519Verifier, Verifier};
