//! # Wire Messages
//!
//! Hand-written prost message definitions for both wire schemas. Field tags
//! are part of the deployed wire contract: byte-exact compatibility depends
//! on this exact field layout and tag numbering, per schema version.
//!
//! The schemas are deliberately kept as two independent modules, mirroring
//! their independent deployment histories; they share no types.

pub mod v1;
pub mod v2;
