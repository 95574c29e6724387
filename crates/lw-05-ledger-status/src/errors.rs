//! Error types for the status tracker.

use lw_02_tx_codec::CodecError;
use shared_types::BlockNumber;
use thiserror::Error;

/// Errors that can occur while tracking transaction statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The transaction was not seen within the retry budget.
    #[error("transaction [{tx_id}] not found after {attempts} attempts")]
    NotFound { tx_id: String, attempts: u32 },

    /// An envelope in the block cannot be parsed; the whole block is
    /// discarded, nothing is committed.
    #[error("block [{block}] slot [{slot}] cannot be parsed: {source}")]
    EnvelopeDecode {
        block: BlockNumber,
        slot: usize,
        #[source]
        source: CodecError,
    },

    /// The block's status filter does not line up with its envelopes.
    #[error("block [{block}] is malformed: {reason}")]
    MalformedBlock { block: BlockNumber, reason: String },
}
