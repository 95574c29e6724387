//! Error types for read/write reconciliation.

use thiserror::Error;

/// Errors that can occur while reconciling observations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// An observation touches a namespace whose current version was never
    /// registered. Namespaces must be pre-registered before any of their
    /// keys are observed.
    #[error("namespace [{ns_id}] has no registered current version")]
    UnknownNamespaceVersion { ns_id: String },
}
