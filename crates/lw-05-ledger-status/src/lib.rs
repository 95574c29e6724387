//! # Ledger Status Subsystem (lw-05)
//!
//! An in-memory, eventually-consistent cache of transaction outcomes and
//! containing-block numbers. Blocks arrive out of band through
//! [`LedgerStatusTracker::ingest`]; lookups poll with a bounded
//! [`RetryPolicy`] because a push-based notification channel does not yet
//! exist at this layer.
//!
//! Entries live for the process lifetime; this cache is best-effort, not a
//! durability guarantee.

pub mod errors;
pub mod tracker;

pub use errors::StatusError;
pub use tracker::{LedgerStatusTracker, RetryPolicy, TxStatus};
