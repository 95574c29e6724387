//! # Status Flow Tests
//!
//! The receive-side choreography around block delivery:
//!
//! ```text
//! [Deployer] ──deployment tx──→ [Codec] ──envelope──→ [Block Source]
//!                                                          │
//!                                   [Status Tracker] ←──ingest
//!                                          │
//!                                       lookup ←── [Finality API]
//! ```

use lw_01_namespace_resolution::{NamespaceRegistration, StaticMappingService};
use lw_02_tx_codec::{namespace_deployment, TxCodec, V1Codec, V2Codec};
use lw_05_ledger_status::{LedgerStatusTracker, RetryPolicy, StatusError, TxStatus};
use shared_types::{
    Block, NamespacePolicy, Transaction, TxOutcome, VersionNumber, META_NAMESPACE,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        interval: Duration::from_millis(10),
    }
}

fn deployment_envelope(codec: &dyn TxCodec, tx_id: &str, ns_id: &str) -> Vec<u8> {
    let policy = NamespacePolicy::new("ed25519", b"verification-key".to_vec());
    let ns = namespace_deployment(codec, ns_id, 0, &policy).unwrap();
    let tx = Transaction::new(tx_id, vec![ns], vec![b"deployer-sig".to_vec()]);
    codec.serialize(Some(&tx)).unwrap()
}

#[test]
fn test_deploy_ingest_lookup_v2() {
    init_logging();
    let codec = Arc::new(V2Codec::new());
    let tracker = LedgerStatusTracker::new(codec.clone(), fast_retry());

    // One committed slot, one aborted slot. v2 commits at byte 0.
    let block = Block {
        number: 17,
        envelopes: vec![
            deployment_envelope(codec.as_ref(), "deploy-iou", "iou"),
            deployment_envelope(codec.as_ref(), "deploy-escrow", "escrow"),
        ],
        status_filter: vec![0, 1],
    };
    tracker.ingest(&block).unwrap();

    assert_eq!(
        tracker.lookup("deploy-iou").unwrap(),
        TxStatus {
            outcome: TxOutcome::Valid,
            block_number: 17,
        }
    );
    assert_eq!(
        tracker.lookup("deploy-escrow").unwrap().outcome,
        TxOutcome::InvalidOtherReason
    );
}

#[test]
fn test_deploy_ingest_lookup_v1() {
    init_logging();
    let mapping = StaticMappingService::new([NamespaceRegistration::new(1, "iou")]);
    let codec = Arc::new(V1Codec::new(Arc::new(mapping)));
    let tracker = LedgerStatusTracker::new(codec.clone(), fast_retry());

    // v1 commits at byte 1.
    let block = Block {
        number: 5,
        envelopes: vec![deployment_envelope(codec.as_ref(), "deploy-iou", "iou")],
        status_filter: vec![1],
    };
    tracker.ingest(&block).unwrap();

    assert_eq!(tracker.lookup("deploy-iou").unwrap().outcome, TxOutcome::Valid);
}

#[test]
fn test_unknown_transaction_exhausts_retries() {
    let codec = Arc::new(V2Codec::new());
    let tracker = LedgerStatusTracker::new(codec, fast_retry());

    assert_eq!(
        tracker.lookup("never-submitted"),
        Err(StatusError::NotFound {
            tx_id: "never-submitted".to_string(),
            attempts: 3,
        })
    );
}

#[test]
fn test_deployment_record_round_trips_through_meta_namespace() {
    let codec = V2Codec::new();
    let policy = NamespacePolicy::new("ed25519", b"vk".to_vec());
    let ns = namespace_deployment(&codec, "iou", 2, &policy).unwrap();

    assert_eq!(ns.ns_id, META_NAMESPACE);
    let record = &ns.read_writes[0];

    // The record key is the namespace's own wire key; the value is the
    // serialized policy; the prior version is deployment version - 1.
    assert_eq!(codec.decode_namespace_id(&record.key).unwrap(), "iou");
    assert_eq!(codec.decode_namespace_policy(&record.value).unwrap(), policy);
    assert_eq!(record.version, VersionNumber(1).to_bytes());
}

#[test]
fn test_later_blocks_extend_the_cache() {
    let codec = Arc::new(V2Codec::new());
    let tracker = LedgerStatusTracker::new(codec.clone(), fast_retry());

    for number in 1..=3u64 {
        let block = Block {
            number,
            envelopes: vec![deployment_envelope(
                codec.as_ref(),
                &format!("tx-{number}"),
                "iou",
            )],
            status_filter: vec![0],
        };
        tracker.ingest(&block).unwrap();
    }

    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.lookup("tx-2").unwrap().block_number, 2);
}
