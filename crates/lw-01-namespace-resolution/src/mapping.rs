//! # Cached Bijective Mapping (schema v1)
//!
//! Schema v1 puts a small numeric id on the wire. The id/name binding comes
//! from a registration source and is cached in a [`BiMap`]; the reload
//! strategy is injected so the source can later become a remote service
//! without touching consumers.

use crate::bimap::{BiMap, ReloadFn};
use crate::errors::NamespaceError;
use shared_types::{NamespaceId, META_NAMESPACE};
use std::collections::HashMap;

/// The reserved numeric id of the meta-namespace on the v1 wire.
pub const META_NAMESPACE_WIRE_ID: u32 = 1024;

/// A statically registered namespace binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRegistration {
    pub id: u32,
    pub name: NamespaceId,
}

impl NamespaceRegistration {
    pub fn new(id: u32, name: impl Into<NamespaceId>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Bidirectional namespace id resolution for the v1 codec.
pub trait MappingService: Send + Sync {
    /// Resolve a namespace name to its numeric wire id.
    fn id_by_name(&self, name: &str) -> Result<u32, NamespaceError>;

    /// Resolve a numeric wire id back to its namespace name.
    fn name_by_id(&self, id: u32) -> Result<NamespaceId, NamespaceError>;
}

/// A [`MappingService`] seeded from a fixed registration list.
///
/// The meta-namespace is always registered, bound to
/// [`META_NAMESPACE_WIRE_ID`]. The cache populates on first use through the
/// registration snapshot taken at construction.
pub struct StaticMappingService {
    nss: BiMap<u32, NamespaceId>,
}

impl StaticMappingService {
    pub fn new(registrations: impl IntoIterator<Item = NamespaceRegistration>) -> Self {
        let mut bindings: Vec<NamespaceRegistration> = registrations.into_iter().collect();
        bindings.push(NamespaceRegistration::new(
            META_NAMESPACE_WIRE_ID,
            META_NAMESPACE,
        ));

        let snapshot: HashMap<u32, NamespaceId> = bindings
            .into_iter()
            .map(|reg| (reg.id, reg.name))
            .collect();
        let reload: ReloadFn<u32, NamespaceId> = Box::new(move || Ok(snapshot.clone()));

        Self {
            nss: BiMap::new(reload),
        }
    }

    /// Build a service around an arbitrary reload strategy instead of a
    /// static snapshot. The strategy must include the meta-namespace
    /// binding itself.
    pub fn with_reload(reload: ReloadFn<u32, NamespaceId>) -> Self {
        Self {
            nss: BiMap::new(reload),
        }
    }
}

impl MappingService for StaticMappingService {
    fn id_by_name(&self, name: &str) -> Result<u32, NamespaceError> {
        self.nss
            .inverse_get_or_reload(&name.to_string())?
            .ok_or_else(|| NamespaceError::UnknownMapping {
                ns_id: name.to_string(),
            })
    }

    fn name_by_id(&self, id: u32) -> Result<NamespaceId, NamespaceError> {
        self.nss
            .get_or_reload(&id)?
            .ok_or(NamespaceError::UnknownWireId { wire_id: id })
    }
}
