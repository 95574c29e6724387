//! # Read/Write Reconciliation Subsystem (lw-03)
//!
//! Turns raw per-namespace read and write observations into the minimal
//! read-only / read-write / blind-write partition a transaction carries,
//! and folds decoded transactions back into an accumulator.
//!
//! ## Reconciliation Rules
//!
//! Writes are staged first, each as a tentative blind write. Reads are
//! processed second: a read of a staged key merges it into a read-write
//! entry (the read's version, the write's value); any other read lands
//! read-only. This ordering is load-bearing — a read never demotes an
//! existing read-write entry, and a write with no matching read stays
//! blind.
//!
//! ## Preconditions
//!
//! Every namespace touched by an observation must be pre-registered with
//! its known current version. Reconciliation checks this before building
//! any partition, so a contract violation never produces partial output.

pub mod errors;
pub mod reconcile;
pub mod rwset;

pub use errors::ReconcileError;
pub use reconcile::{absorb, reconcile, NamespaceVersions};
pub use rwset::ReadWriteSet;
