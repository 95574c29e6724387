//! # Reloadable Bijective Map
//!
//! A bidirectional map with read-through caching. Lookups on warm entries
//! take only the read lock; a miss escalates to the write lock, re-checks,
//! and runs the injected reload strategy to repopulate the whole map before
//! retrying the lookup.
//!
//! Holding the write lock across the reload serializes concurrent missers:
//! each waiter re-checks after acquiring the lock, so a miss burst runs the
//! reload at most once.

use crate::errors::NamespaceError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// The injected reload strategy: produces the complete key/value mapping.
///
/// Reload must be idempotent; it may run again on a later miss episode.
pub type ReloadFn<K, V> =
    Box<dyn Fn() -> Result<HashMap<K, V>, NamespaceError> + Send + Sync>;

struct Maps<K, V> {
    by_key: HashMap<K, V>,
    by_value: HashMap<V, K>,
}

/// A lock-protected bijective map populated lazily through a reload strategy.
///
/// Invariant: the mapping is a true bijection. The reload strategy must not
/// bind one key to two values or one value to two keys; entries of a
/// violating reload overwrite each other in load order.
pub struct BiMap<K, V> {
    inner: RwLock<Maps<K, V>>,
    reload: ReloadFn<K, V>,
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Create an empty map; the first miss populates it via `reload`.
    pub fn new(reload: ReloadFn<K, V>) -> Self {
        Self {
            inner: RwLock::new(Maps {
                by_key: HashMap::new(),
                by_value: HashMap::new(),
            }),
            reload,
        }
    }

    /// Warm lookup by key; never reloads.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().by_key.get(key).cloned()
    }

    /// Warm lookup by value; never reloads.
    pub fn inverse_get(&self, value: &V) -> Option<K> {
        self.inner.read().by_value.get(value).cloned()
    }

    /// Lookup by key, reloading once on a cold miss.
    ///
    /// `Ok(None)` means the reload succeeded but still did not produce the
    /// key; callers turn that into their own typed error.
    pub fn get_or_reload(&self, key: &K) -> Result<Option<V>, NamespaceError> {
        if let Some(v) = self.get(key) {
            return Ok(Some(v));
        }

        let mut maps = self.inner.write();
        // Re-check: another misser may have reloaded while we waited.
        if let Some(v) = maps.by_key.get(key) {
            return Ok(Some(v.clone()));
        }

        Self::load(&mut maps, &self.reload)?;
        Ok(maps.by_key.get(key).cloned())
    }

    /// Lookup by value, reloading once on a cold miss.
    pub fn inverse_get_or_reload(&self, value: &V) -> Result<Option<K>, NamespaceError> {
        if let Some(k) = self.inverse_get(value) {
            return Ok(Some(k));
        }

        let mut maps = self.inner.write();
        if let Some(k) = maps.by_value.get(value) {
            return Ok(Some(k.clone()));
        }

        Self::load(&mut maps, &self.reload)?;
        Ok(maps.by_value.get(value).cloned())
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().by_key.is_empty()
    }

    fn load(maps: &mut Maps<K, V>, reload: &ReloadFn<K, V>) -> Result<(), NamespaceError> {
        let entries = reload()?;
        debug!(entries = entries.len(), "reloading bijective map");
        for (k, v) in entries {
            maps.by_key.insert(k.clone(), v.clone());
            maps.by_value.insert(v, k);
        }
        Ok(())
    }
}
