//! # Codec Flow Tests
//!
//! The full submit-side pipeline and its receive-side inverse:
//!
//! ```text
//! observations ──reconcile──→ Transaction ──serialize──→ wire bytes
//!                                                             │
//! observations ←──absorb──── Transaction ←──deserialize───────┘
//! ```
//!
//! Both wire schemas are driven through the same flows; the logical
//! content must survive either one unchanged.

use ed25519_dalek::{Signer, SigningKey};
use lw_01_namespace_resolution::{NamespaceRegistration, StaticMappingService};
use lw_02_tx_codec::{CodecRegistry, V1Codec, V2Codec};
use lw_03_rw_reconciliation::{absorb, reconcile, NamespaceVersions, ReadWriteSet};
use lw_04_endorsement_hashing::{endorsement_digest, verify_endorsement, Ed25519Verifier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{SchemaVersion, VersionNumber};
use std::sync::Arc;

fn registry() -> CodecRegistry {
    let mapping = StaticMappingService::new([
        NamespaceRegistration::new(1, "iou"),
        NamespaceRegistration::new(2, "escrow"),
    ]);
    CodecRegistry::new()
        .register(SchemaVersion::V1, Arc::new(V1Codec::new(Arc::new(mapping))))
        .register(SchemaVersion::V2, Arc::new(V2Codec::new()))
}

fn sample_observations() -> (ReadWriteSet, NamespaceVersions) {
    let mut rws = ReadWriteSet::new();
    rws.add_read("iou", b"alice".to_vec(), VersionNumber(4).to_bytes());
    rws.add_read("iou", b"bob".to_vec(), VersionNumber(2).to_bytes());
    rws.add_write("iou", b"bob".to_vec(), b"90".to_vec());
    rws.add_write("iou", b"carol".to_vec(), b"10".to_vec());
    rws.add_write("escrow", b"pot".to_vec(), b"55".to_vec());

    let mut versions = NamespaceVersions::new();
    versions.insert("iou".to_string(), VersionNumber(11).to_bytes());
    versions.insert("escrow".to_string(), VersionNumber(3).to_bytes());
    (rws, versions)
}

#[test]
fn test_full_pipeline_both_schemas() {
    let registry = registry();
    let (rws, versions) = sample_observations();
    let tx = reconcile("pipeline-tx", &rws, &versions).unwrap();

    for version in [SchemaVersion::V1, SchemaVersion::V2] {
        let codec = registry.get(version).unwrap();

        let raw = codec.serialize(Some(&tx)).unwrap();
        let decoded = codec.deserialize(&raw).unwrap();
        assert_eq!(decoded, tx, "logical content must survive schema {version}");

        let mut recovered = ReadWriteSet::new();
        absorb(&mut recovered, &decoded);
        assert_eq!(recovered, rws, "absorb must invert reconcile via {version}");
    }
}

#[test]
fn test_schemas_produce_distinct_wire_bytes() {
    let registry = registry();
    let (rws, versions) = sample_observations();
    let tx = reconcile("wire-tx", &rws, &versions).unwrap();

    let v1_bytes = registry
        .get(SchemaVersion::V1)
        .unwrap()
        .serialize(Some(&tx))
        .unwrap();
    let v2_bytes = registry
        .get(SchemaVersion::V2)
        .unwrap()
        .serialize(Some(&tx))
        .unwrap();

    // Same logical transaction, incompatible encodings.
    assert_ne!(v1_bytes, v2_bytes);
}

#[test]
fn test_endorsement_survives_wire_round_trip() {
    let registry = registry();
    let (rws, versions) = sample_observations();
    let mut tx = reconcile("endorsed-tx", &rws, &versions).unwrap();

    // Endorse the first namespace and attach the signature positionally.
    let signer = SigningKey::from_bytes(&[42u8; 32]);
    let digest = endorsement_digest(&tx.id, &tx.namespaces[0]);
    tx.signatures = vec![signer.sign(&digest).to_bytes().to_vec()];

    let codec = registry.get(SchemaVersion::V2).unwrap();
    let decoded = codec.deserialize(&codec.serialize(Some(&tx)).unwrap()).unwrap();

    let verifier = Ed25519Verifier::new(signer.verifying_key());
    verify_endorsement(
        &verifier,
        &decoded.id,
        &decoded.namespaces[0],
        &decoded.signatures[0],
    )
    .unwrap();
}

#[test]
fn test_digest_agrees_across_schema_round_trips() {
    let registry = registry();
    let (rws, versions) = sample_observations();
    let tx = reconcile("digest-tx", &rws, &versions).unwrap();
    let expected = endorsement_digest(&tx.id, &tx.namespaces[0]);

    for version in [SchemaVersion::V1, SchemaVersion::V2] {
        let codec = registry.get(version).unwrap();
        let decoded = codec.deserialize(&codec.serialize(Some(&tx)).unwrap()).unwrap();
        assert_eq!(
            endorsement_digest(&decoded.id, &decoded.namespaces[0]),
            expected
        );
    }
}

#[test]
fn test_randomized_round_trips() {
    let registry = registry();
    let mut rng = StdRng::seed_from_u64(0x1edeb);

    for case in 0..50 {
        let mut rws = ReadWriteSet::new();
        let mut versions = NamespaceVersions::new();

        for ns in ["iou", "escrow"] {
            versions.insert(ns.to_string(), VersionNumber(rng.gen()).to_bytes());
            for _ in 0..rng.gen_range(0..6) {
                let key = vec![rng.gen::<u8>() % 8];
                rws.add_read(ns, key, VersionNumber(rng.gen_range(0..100)).to_bytes());
            }
            for _ in 0..rng.gen_range(0..6) {
                let key = vec![rng.gen::<u8>() % 8];
                let value: Vec<u8> = (0..rng.gen_range(0..16)).map(|_| rng.gen()).collect();
                rws.add_write(ns, key, value);
            }
        }

        let tx = reconcile(format!("fuzz-{case}"), &rws, &versions).unwrap();
        for ns in &tx.namespaces {
            assert!(ns.has_disjoint_partitions());
        }

        for version in [SchemaVersion::V1, SchemaVersion::V2] {
            let codec = registry.get(version).unwrap();
            let decoded = codec.deserialize(&codec.serialize(Some(&tx)).unwrap()).unwrap();

            let mut recovered = ReadWriteSet::new();
            absorb(&mut recovered, &decoded);
            assert_eq!(recovered, rws);
        }
    }
}

#[test]
fn test_reconciler_order_does_not_change_digest() {
    let versions: NamespaceVersions =
        [("iou".to_string(), VersionNumber(1).to_bytes())].into();

    // Same observations, inserted in opposite orders.
    let mut forward = ReadWriteSet::new();
    for key in [b"a", b"b", b"c", b"d"] {
        forward.add_read("iou", key.to_vec(), VersionNumber(1).to_bytes());
        forward.add_write("iou", key.to_vec(), b"v".to_vec());
    }

    let mut backward = ReadWriteSet::new();
    for key in [b"d", b"c", b"b", b"a"] {
        backward.add_write("iou", key.to_vec(), b"v".to_vec());
        backward.add_read("iou", key.to_vec(), VersionNumber(1).to_bytes());
    }

    let tx_a = reconcile("order-tx", &forward, &versions).unwrap();
    let tx_b = reconcile("order-tx", &backward, &versions).unwrap();

    assert_eq!(
        endorsement_digest(&tx_a.id, &tx_a.namespaces[0]),
        endorsement_digest(&tx_b.id, &tx_b.namespaces[0])
    );
}

#[test]
fn test_absent_transaction_is_empty_for_every_schema() {
    let registry = registry();
    for version in [SchemaVersion::V1, SchemaVersion::V2] {
        let codec = registry.get(version).unwrap();
        assert!(codec.serialize(None).unwrap().is_empty());
    }
}
