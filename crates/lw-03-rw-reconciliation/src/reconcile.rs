//! # Reconciliation
//!
//! [`reconcile`] partitions an accumulator into a [`Transaction`];
//! [`absorb`] is the inverse direction, folding a decoded transaction's
//! partitions back into an accumulator.

use crate::errors::ReconcileError;
use crate::rwset::ReadWriteSet;
use shared_types::{NamespaceId, Read, ReadWrite, Transaction, TxNamespace, Write};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Known current version of every pre-registered namespace.
pub type NamespaceVersions = BTreeMap<NamespaceId, Vec<u8>>;

#[derive(Default)]
struct Staging {
    read_set: BTreeMap<Vec<u8>, Read>,
    read_write_set: BTreeMap<Vec<u8>, ReadWrite>,
    write_set: BTreeMap<Vec<u8>, Write>,
}

/// Partition the accumulated observations into per-namespace read-only /
/// read-write / blind-write sets.
///
/// Precondition: every namespace with at least one observation has an entry
/// in `ns_versions`; violations fail before any partition is built. The
/// produced transaction carries no signatures — endorsement happens later.
pub fn reconcile(
    tx_id: impl Into<String>,
    rws: &ReadWriteSet,
    ns_versions: &NamespaceVersions,
) -> Result<Transaction, ReconcileError> {
    let tx_id = tx_id.into();
    debug!(%tx_id, "reconciling read/write set");

    for ns_id in rws.namespaces() {
        if !ns_versions.contains_key(ns_id) {
            return Err(ReconcileError::UnknownNamespaceVersion {
                ns_id: ns_id.clone(),
            });
        }
    }

    let mut staged: BTreeMap<&NamespaceId, Staging> = BTreeMap::new();

    // Writes first: each is a tentative blind write.
    for (ns_id, key_map) in rws.writes() {
        let staging = staged.entry(ns_id).or_default();
        for (key, value) in key_map {
            trace!(ns_id = %ns_id, key = %hex::encode(key), "staging blind write");
            staging
                .write_set
                .insert(key.clone(), Write::new(key.clone(), value.clone()));
        }
    }

    // Reads second: a read of a staged key turns it into a read-write.
    for (ns_id, key_map) in rws.reads() {
        let staging = staged.entry(ns_id).or_default();
        for (key, version) in key_map {
            if let Some(write) = staging.write_set.remove(key) {
                trace!(ns_id = %ns_id, key = %hex::encode(key), "blind write was a read-write");
                staging.read_write_set.insert(
                    key.clone(),
                    ReadWrite::new(key.clone(), version.clone(), write.value),
                );
            } else {
                trace!(ns_id = %ns_id, key = %hex::encode(key), "staging read");
                staging
                    .read_set
                    .insert(key.clone(), Read::new(key.clone(), version.clone()));
            }
        }
    }

    let namespaces = staged
        .into_iter()
        .map(|(ns_id, staging)| {
            TxNamespace::new(
                ns_id.clone(),
                ns_versions[ns_id].clone(),
                staging.read_set.into_values().collect(),
                staging.read_write_set.into_values().collect(),
                staging.write_set.into_values().collect(),
            )
        })
        .collect();

    Ok(Transaction::new(tx_id, namespaces, vec![]))
}

/// Fold a decoded transaction's partitions back into an accumulator.
///
/// Read-write entries contribute both a read and a write observation;
/// read-only and blind-write entries contribute one each.
pub fn absorb(destination: &mut ReadWriteSet, tx: &Transaction) {
    debug!(tx_id = %tx.id, "absorbing transaction into read/write set");

    for ns in &tx.namespaces {
        for read in &ns.reads_only {
            destination.add_read(ns.ns_id.clone(), read.key.clone(), read.version.clone());
        }

        for write in &ns.blind_writes {
            destination.add_write(ns.ns_id.clone(), write.key.clone(), write.value.clone());
        }

        for rw in &ns.read_writes {
            destination.add_read(ns.ns_id.clone(), rw.key.clone(), rw.version.clone());
            destination.add_write(ns.ns_id.clone(), rw.key.clone(), rw.value.clone());
        }
    }
}
