//! Error types for namespace resolution.

use thiserror::Error;

/// Errors that can occur while resolving namespace identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// The identifier fails validation: empty, longer than the limit, or
    /// containing characters outside `[a-z0-9_]` (the meta-namespace is
    /// exempt).
    #[error("invalid namespace ID [{ns_id}]")]
    InvalidNamespaceId { ns_id: String },

    /// The mapping cache has no id for this name, even after a reload.
    #[error("no wire id mapped for namespace [{ns_id}]")]
    UnknownMapping { ns_id: String },

    /// The mapping cache has no name for this wire id, even after a reload.
    #[error("no namespace mapped for wire id [{wire_id}]")]
    UnknownWireId { wire_id: u32 },

    /// The injected reload strategy failed to produce a mapping.
    #[error("namespace mapping reload failed: {reason}")]
    ReloadFailed { reason: String },
}
