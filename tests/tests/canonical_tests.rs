//! Canonical-form and malleability rejection tests

use vouch::prelude::*;
use vouch_tests::{add_group_order, GROUP_ORDER};

fn fixed_private_key() -> PrivateKey {
    PrivateKey::from_bytes([0x5au8; 32])
}

#[test]
fn test_scalar_classification() {
    assert_eq!(classify_scalar(&[0u8; 32]), ScalarForm::Zero);

    let mut one = [0u8; 32];
    one[0] = 1;
    assert_eq!(classify_scalar(&one), ScalarForm::Reduced);

    let mut below_order = GROUP_ORDER;
    below_order[0] -= 1;
    assert_eq!(classify_scalar(&below_order), ScalarForm::Reduced);

    assert_eq!(classify_scalar(&GROUP_ORDER), ScalarForm::NotReduced);
    assert_eq!(classify_scalar(&[0xffu8; 32]), ScalarForm::NotReduced);
}

#[test]
fn test_fresh_signatures_carry_reduced_responses() {
    for seed in [0x01u8, 0x2c, 0x7f, 0xd9] {
        let signature = sign(&PrivateKey::from_bytes([seed; 32]), b"canonical output").unwrap();
        assert_eq!(classify_scalar(&signature.response()), ScalarForm::Reduced);
    }
}

#[test]
fn test_congruent_unreduced_response_is_rejected() {
    let private_key = fixed_private_key();
    let public_key = derive_public_key(&private_key);
    let message = b"a scalar has exactly one accepted encoding";

    let signature = sign(&private_key, message).unwrap();
    assert!(verify(&public_key, message, &signature));

    // response + group order is congruent modulo the order, so naive
    // arithmetic would accept it; the canonical-form guard must not.
    let mut shifted = signature.to_bytes();
    shifted[32..].copy_from_slice(&add_group_order(&signature.response()));
    assert!(!verify(&public_key, message, &Signature::from_bytes(shifted)));
}

#[test]
fn test_zero_response_is_rejected() {
    let private_key = fixed_private_key();
    let public_key = derive_public_key(&private_key);
    let message = b"zero is reduced but degenerate";

    let signature = sign(&private_key, message).unwrap();
    let mut zeroed = signature.to_bytes();
    zeroed[32..].fill(0);
    assert!(!verify(&public_key, message, &Signature::from_bytes(zeroed)));
}

#[test]
fn test_unreduced_garbage_response_is_rejected() {
    let public_key = derive_public_key(&fixed_private_key());

    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(&[0x21u8; 32]);
    bytes[32..].copy_from_slice(&[0xffu8; 32]);
    assert!(!verify(&public_key, b"garbage", &Signature::from_bytes(bytes)));
}
