//! # Ledger Status Tracker
//!
//! Two maps (transaction id → outcome, transaction id → block number)
//! behind one read/write lock. Ingestion stages a block's updates fully
//! before taking the write lock, so readers never observe a half-ingested
//! block; lookups take the read lock only for the map probe and sleep
//! unlocked between retries.

use crate::errors::StatusError;
use lw_02_tx_codec::TxCodec;
use parking_lot::RwLock;
use shared_types::{Block, BlockNumber, TxId, TxOutcome};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Bounded polling parameters for [`LedgerStatusTracker::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            interval: Duration::from_secs(1),
        }
    }
}

/// A tracked transaction's outcome and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxStatus {
    pub outcome: TxOutcome,
    pub block_number: BlockNumber,
}

#[derive(Default)]
struct State {
    outcomes: HashMap<TxId, TxOutcome>,
    block_numbers: HashMap<TxId, BlockNumber>,
}

/// In-memory transaction status cache, populated by block ingestion and
/// queried with bounded retry.
pub struct LedgerStatusTracker {
    codec: Arc<dyn TxCodec>,
    retry: RetryPolicy,
    state: RwLock<State>,
}

impl LedgerStatusTracker {
    pub fn new(codec: Arc<dyn TxCodec>, retry: RetryPolicy) -> Self {
        Self {
            codec,
            retry,
            state: RwLock::new(State::default()),
        }
    }

    /// Record the outcome of every transaction slot in `block`.
    ///
    /// The block's updates are staged completely before the write lock is
    /// taken; a slot that cannot be parsed aborts the whole block with
    /// nothing committed. Re-ingesting a block overwrites idempotently.
    pub fn ingest(&self, block: &Block) -> Result<(), StatusError> {
        debug!(block = block.number, slots = block.envelopes.len(), "ingesting block");

        if block.status_filter.len() != block.envelopes.len() {
            return Err(StatusError::MalformedBlock {
                block: block.number,
                reason: format!(
                    "status filter covers {} slots, block has {}",
                    block.status_filter.len(),
                    block.envelopes.len()
                ),
            });
        }

        let mut new_outcomes = HashMap::with_capacity(block.envelopes.len());
        let mut new_block_numbers = HashMap::with_capacity(block.envelopes.len());

        for (slot, envelope) in block.envelopes.iter().enumerate() {
            let tx = self
                .codec
                .deserialize(envelope)
                .map_err(|source| StatusError::EnvelopeDecode {
                    block: block.number,
                    slot,
                    source,
                })?;

            let outcome =
                TxOutcome::from_validity(self.codec.is_status_valid(block.status_filter[slot]));
            debug!(block = block.number, slot, tx_id = %tx.id, ?outcome, "tracked transaction");

            new_outcomes.insert(tx.id.clone(), outcome);
            new_block_numbers.insert(tx.id, block.number);
        }

        let mut state = self.state.write();
        state.outcomes.extend(new_outcomes);
        state.block_numbers.extend(new_block_numbers);
        debug!(total = state.outcomes.len(), "transaction statuses cached");
        Ok(())
    }

    /// Look up a transaction's outcome and containing block.
    ///
    /// Misses sleep `retry.interval` between attempts, up to
    /// `retry.max_attempts` probes; the lock is never held while sleeping.
    pub fn lookup(&self, tx_id: &str) -> Result<TxStatus, StatusError> {
        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                std::thread::sleep(self.retry.interval);
            }

            if let Some(status) = self.probe(tx_id) {
                debug!(%tx_id, outcome = ?status.outcome, block = status.block_number, "transaction found");
                return Ok(status);
            }
            warn!(%tx_id, attempt = attempt + 1, "transaction not found, retrying");
        }

        Err(StatusError::NotFound {
            tx_id: tx_id.to_string(),
            attempts: self.retry.max_attempts,
        })
    }

    fn probe(&self, tx_id: &str) -> Option<TxStatus> {
        let state = self.state.read();
        let outcome = state.outcomes.get(tx_id).copied()?;
        let block_number = state.block_numbers.get(tx_id).copied()?;
        Some(TxStatus {
            outcome,
            block_number,
        })
    }

    /// Number of tracked transactions.
    pub fn len(&self) -> usize {
        self.state.read().outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().outcomes.is_empty()
    }
}
