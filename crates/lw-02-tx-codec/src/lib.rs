//! # Transaction Codec Subsystem (lw-02)
//!
//! Canonical binary encoding of transactions, in two incompatible wire
//! schemas behind one [`TxCodec`] contract:
//!
//! - **v1** ([`V1Codec`]): namespace identifiers travel as small numeric
//!   ids, resolved through the lw-01 mapping cache.
//! - **v2** ([`V2Codec`]): namespace identifiers travel as validated text,
//!   with the meta-namespace substituted by a reserved wire literal.
//!
//! Both schemas share the same logical message shape (transaction id,
//! ordered namespace records, signature list); the field tags are fixed and
//! must never be renumbered, because deployed peers parse these exact
//! layouts.
//!
//! The schema tag selecting a codec travels out of band; a
//! [`CodecRegistry`] resolves it to the registered codec instance. The two
//! variants share no mutable state.

pub mod codec;
pub mod deploy;
pub mod errors;
pub mod v1;
pub mod v2;
pub mod wire;

pub use codec::{CodecRegistry, TxCodec};
pub use deploy::namespace_deployment;
pub use errors::CodecError;
pub use v1::V1Codec;
pub use v2::V2Codec;
