//! Property-based tests for signing and verification

use proptest::prelude::*;
use qsign::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sign_verify_roundtrip(
        seed in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 0..512),
        context in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let (pk, sk) = Dilithium2::keypair_from_seed(&seed).unwrap();
        let options = SignOptions::deterministic().with_context(&context);
        let sig = Dilithium2::sign_with_options(&message, &sk, &options).unwrap();

        prop_assert_eq!(sig.len(), Dilithium2::SIGNATURE_SIZE);
        prop_assert!(Dilithium2::verify_with_context(&message, &context, &sig, &pk));
    }

    #[test]
    fn prop_modified_message_rejected(
        message in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let (pk, sk) = Dilithium2::keypair_from_seed(&[3u8; 32]).unwrap();
        let sig = Dilithium2::sign_deterministic(&message, &sk).unwrap();

        let mut modified = message.clone();
        modified[index.index(message.len())] ^= flip;
        prop_assert!(!Dilithium2::verify(&modified, &sig, &pk));
    }

    #[test]
    fn prop_public_key_recovered_from_secret_key(seed in any::<[u8; 32]>()) {
        let (pk, sk) = Dilithium2::keypair_from_seed(&seed).unwrap();
        prop_assert_eq!(Dilithium2::public_key_from_secret_key(&sk).unwrap(), pk);
    }
}
