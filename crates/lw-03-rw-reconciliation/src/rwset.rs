//! # Read/Write-Set Accumulator
//!
//! Per-namespace observation maps. Ordered maps keep iteration
//! deterministic, which makes logs and tests stable; canonical ordering
//! for hashing is still applied explicitly by the endorsement digest.

use shared_types::NamespaceId;
use std::collections::BTreeMap;

/// Raw read and write observations, grouped by namespace.
///
/// A later observation of the same key overwrites the earlier one, matching
/// last-write-wins execution semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadWriteSet {
    /// namespace → key → version read.
    reads: BTreeMap<NamespaceId, BTreeMap<Vec<u8>, Vec<u8>>>,
    /// namespace → key → value written.
    writes: BTreeMap<NamespaceId, BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl ReadWriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` of `ns_id` was read at `version`.
    pub fn add_read(
        &mut self,
        ns_id: impl Into<NamespaceId>,
        key: impl Into<Vec<u8>>,
        version: impl Into<Vec<u8>>,
    ) {
        self.reads
            .entry(ns_id.into())
            .or_default()
            .insert(key.into(), version.into());
    }

    /// Record that `key` of `ns_id` was written to `value`.
    pub fn add_write(
        &mut self,
        ns_id: impl Into<NamespaceId>,
        key: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) {
        self.writes
            .entry(ns_id.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn reads(&self) -> &BTreeMap<NamespaceId, BTreeMap<Vec<u8>, Vec<u8>>> {
        &self.reads
    }

    pub fn writes(&self) -> &BTreeMap<NamespaceId, BTreeMap<Vec<u8>, Vec<u8>>> {
        &self.writes
    }

    /// Every namespace touched by at least one observation.
    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceId> {
        let mut all: Vec<&NamespaceId> = self.reads.keys().chain(self.writes.keys()).collect();
        all.sort();
        all.dedup();
        all.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }
}
