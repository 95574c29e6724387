//! # Direct Namespace Validation (schema v2)
//!
//! Schema v2 puts the namespace identifier itself on the wire, so encoding
//! is validation plus the meta-namespace substitution, and decoding is the
//! inverse textual mapping.

use crate::errors::NamespaceError;
use shared_types::{NamespaceId, META_NAMESPACE};

/// Maximum number of characters allowed for a namespace identifier.
///
/// The backing store limits identifiers to 63 characters and namespace
/// tables carry a 3-character prefix, leaving 60 for the namespace itself.
pub const MAX_NAMESPACE_ID_LENGTH: usize = 60;

/// The fixed literal standing in for the meta-namespace on the v2 wire.
pub const META_NAMESPACE_WIRE_LITERAL: &str = "_meta";

/// Validate a namespace identifier.
///
/// Valid identifiers are 1 to [`MAX_NAMESPACE_ID_LENGTH`] characters drawn
/// from `[a-z0-9_]`. The reserved meta-namespace bypasses both checks.
pub fn validate_namespace_id(ns_id: &str) -> Result<(), NamespaceError> {
    if ns_id == META_NAMESPACE {
        return Ok(());
    }

    if ns_id.is_empty() || ns_id.len() > MAX_NAMESPACE_ID_LENGTH {
        return Err(NamespaceError::InvalidNamespaceId {
            ns_id: ns_id.to_string(),
        });
    }

    let valid_chars = ns_id
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if !valid_chars {
        return Err(NamespaceError::InvalidNamespaceId {
            ns_id: ns_id.to_string(),
        });
    }

    Ok(())
}

/// Encode a namespace identifier for the v2 wire.
///
/// The meta-namespace is substituted with its reserved wire literal; every
/// other identifier is validated and passed through unchanged.
pub fn encode_namespace_id(ns_id: &str) -> Result<String, NamespaceError> {
    validate_namespace_id(ns_id)?;
    if ns_id == META_NAMESPACE {
        return Ok(META_NAMESPACE_WIRE_LITERAL.to_string());
    }
    Ok(ns_id.to_string())
}

/// Decode a v2 wire identifier back to its namespace identifier.
pub fn decode_namespace_id(wire_id: &str) -> NamespaceId {
    if wire_id == META_NAMESPACE_WIRE_LITERAL {
        return META_NAMESPACE.to_string();
    }
    wire_id.to_string()
}
