//! # Namespace Resolution Subsystem (lw-01)
//!
//! Bidirectional mapping between human-readable namespace identifiers and
//! their compact on-wire representation. Two variants exist, one per wire
//! schema:
//!
//! - **Direct validation** (schema v2): the identifier itself travels on the
//!   wire after validation; the reserved meta-namespace is substituted with
//!   a fixed wire literal. See [`direct`].
//! - **Cached bijective mapping** (schema v1): identifiers map to small
//!   numeric ids through a reloadable, lock-protected [`BiMap`]. See
//!   [`mapping`].
//!
//! ## Resolution Guarantees
//!
//! - The numeric mapping is a true bijection: no two names share an id and
//!   no two ids share a name.
//! - A lookup that misses after a reload is a hard
//!   [`NamespaceError::UnknownMapping`], never a silent zero value.
//! - Reload runs under the exclusive lock, so a burst of concurrent misses
//!   triggers at most one reload.

pub mod bimap;
pub mod direct;
pub mod errors;
pub mod mapping;

pub use bimap::BiMap;
pub use direct::{
    decode_namespace_id, encode_namespace_id, validate_namespace_id, MAX_NAMESPACE_ID_LENGTH,
    META_NAMESPACE_WIRE_LITERAL,
};
pub use errors::NamespaceError;
pub use mapping::{
    MappingService, NamespaceRegistration, StaticMappingService, META_NAMESPACE_WIRE_ID,
};
