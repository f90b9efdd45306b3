#![cfg(feature = "serde")]

use hdkey_bip32::{CurveKind, Specification};

#[test]
fn node_record_serializes_to_json_with_camel_case_fields() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let master =
        hdkey_bip32::SLIP10Node::from_seed(&seed, CurveKind::Secp256k1, Specification::Bip32).unwrap();

    let json = serde_json::to_value(master.to_record()).unwrap();

    assert_eq!(json["depth"], 0);
    assert!(json["masterFingerprint"].is_null());
    assert!(json["parentFingerprint"].is_u64());
    assert_eq!(json["chainCode"].as_str().unwrap().len(), 64);
    assert!(json["privateKey"].as_str().unwrap().len() > 0);
}

#[test]
fn neutered_node_record_has_no_private_key_field_value() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let master =
        hdkey_bip32::SLIP10Node::from_seed(&seed, CurveKind::Secp256k1, Specification::Bip32).unwrap();

    let json = serde_json::to_value(master.neuter().to_record()).unwrap();
    assert!(json["privateKey"].is_null());
}
