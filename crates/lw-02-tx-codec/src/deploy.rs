//! # Namespace Deployment
//!
//! Deploying a namespace means writing its endorsement policy into the
//! meta-namespace: a read-write entry keyed by the namespace's own wire key
//! whose value is the serialized [`NamespacePolicy`].

use crate::codec::TxCodec;
use crate::errors::CodecError;
use shared_types::{NamespacePolicy, ReadWrite, TxNamespace, VersionNumber, META_NAMESPACE};
use tracing::debug;

/// Build the meta-namespace partition that binds `ns_id` to `policy` at
/// deployment `version`.
///
/// The version written has to be the *current* version: deploying version 0
/// writes with no prior version bytes; deploying version `n` writes with
/// prior version `VersionNumber(n - 1)`.
pub fn namespace_deployment(
    codec: &dyn TxCodec,
    ns_id: &str,
    version: u64,
    policy: &NamespacePolicy,
) -> Result<TxNamespace, CodecError> {
    debug!(ns_id, version, scheme = %policy.scheme, "building namespace deployment");

    let policy_bytes = codec.encode_namespace_policy(policy)?;
    let ns_key = codec.encode_namespace_id(ns_id)?;

    let prior_version = if version > 0 {
        VersionNumber(version - 1).to_bytes()
    } else {
        Vec::new()
    };

    Ok(TxNamespace::new(
        META_NAMESPACE,
        VersionNumber(0).to_bytes(),
        vec![],
        vec![ReadWrite::new(ns_key, prior_version, policy_bytes)],
        vec![],
    ))
}
