//! Property tests for the ledger signature scheme

use proptest::array::uniform32;
use proptest::collection::vec;
use proptest::prelude::*;
use vouch::prelude::*;
use vouch_tests::flip_bit;

proptest! {
    // Signing dominates the cost of every case; keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_always_verifies(
        key_bytes in uniform32(any::<u8>()),
        message in vec(any::<u8>(), 0..512),
    ) {
        let private_key = PrivateKey::from_bytes(key_bytes);
        let public_key = derive_public_key(&private_key);

        let signature = sign(&private_key, &message).unwrap();
        prop_assert!(verify(&public_key, &message, &signature));
    }

    #[test]
    fn prop_any_split_signs_identically(
        key_bytes in uniform32(any::<u8>()),
        message in vec(any::<u8>(), 1..512),
        cut in any::<usize>(),
    ) {
        let private_key = PrivateKey::from_bytes(key_bytes);
        let cut = cut % (message.len() + 1);

        let whole = sign(&private_key, &message).unwrap();
        let split = sign_parts(&private_key, &[&message[..cut], &message[cut..]]).unwrap();
        prop_assert_eq!(whole.to_bytes(), split.to_bytes());

        let public_key = derive_public_key(&private_key);
        prop_assert!(verify_parts(&public_key, &[&message[..cut], &message[cut..]], &whole));
    }

    #[test]
    fn prop_flipped_message_bit_never_verifies(
        key_bytes in uniform32(any::<u8>()),
        message in vec(any::<u8>(), 1..512),
        bit in any::<usize>(),
    ) {
        let private_key = PrivateKey::from_bytes(key_bytes);
        let public_key = derive_public_key(&private_key);
        let signature = sign(&private_key, &message).unwrap();

        let mut tampered = message.clone();
        flip_bit(&mut tampered, bit % (message.len() * 8));
        prop_assert!(!verify(&public_key, &tampered, &signature));
    }

    #[test]
    fn prop_flipped_signature_bit_never_verifies(
        key_bytes in uniform32(any::<u8>()),
        message in vec(any::<u8>(), 0..512),
        bit in 0usize..(64 * 8),
    ) {
        let private_key = PrivateKey::from_bytes(key_bytes);
        let public_key = derive_public_key(&private_key);
        let signature = sign(&private_key, &message).unwrap();

        let mut tampered = signature.to_bytes();
        flip_bit(&mut tampered, bit);
        prop_assert!(!verify(&public_key, &message, &Signature::from_bytes(tampered)));
    }

    #[test]
    fn prop_responses_are_always_canonical(
        key_bytes in uniform32(any::<u8>()),
        message in vec(any::<u8>(), 0..512),
    ) {
        let signature = sign(&PrivateKey::from_bytes(key_bytes), &message).unwrap();
        prop_assert_eq!(classify_scalar(&signature.response()), ScalarForm::Reduced);
    }
}
