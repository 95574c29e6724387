//! # Shared Types Crate
//!
//! This crate contains the transaction data model shared by every LedgerWire
//! subsystem: the read/write-set entities, the namespace version counter and
//! its wire encoding, and the schema version tag.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Wire-Agnostic Entities**: The types in [`entities`] carry decoded,
//!   human-readable namespace identifiers. Schema-specific wire encodings
//!   live in the codec crate, never here.
//! - **No Hidden Versioning**: The schema tag ([`SchemaVersion`]) always
//!   travels out of band; serialized bytes are not self-describing.

pub mod entities;
pub mod schema;
pub mod version;

pub use entities::*;
pub use schema::{SchemaVersion, UnknownSchemaVersion};
pub use version::VersionNumber;
