//! Integration tests for the Dilithium signature API

use qsign::prelude::*;
use qsign_params::pqc::dilithium::DilithiumSchemeParams;
use qsign_tests::{sha3_hex, test_rng};

fn sign_and_verify<P: DilithiumSchemeParams>(seed: u64) {
    let mut rng = test_rng(seed);
    let (pk, sk) = Dilithium::<P>::keypair(&mut rng).unwrap();

    let message = b"Test message for Dilithium signature";
    let sig = Dilithium::<P>::sign(message, &sk).unwrap();
    assert!(Dilithium::<P>::verify(message, &sig, &pk), "{} round trip", P::NAME);

    let modified = b"Modified message that should not verify";
    assert!(!Dilithium::<P>::verify(modified, &sig, &pk), "{} modified", P::NAME);
}

#[test]
fn test_dilithium2_signature() {
    sign_and_verify::<qsign_params::pqc::dilithium::Dilithium2Params>(2);
}

#[test]
fn test_dilithium3_signature() {
    sign_and_verify::<qsign_params::pqc::dilithium::Dilithium3Params>(3);
}

#[test]
fn test_dilithium5_signature() {
    sign_and_verify::<qsign_params::pqc::dilithium::Dilithium5Params>(5);
}

#[test]
fn test_facade_interoperates_with_typed_api() {
    let (pk, sk) = Dilithium3::keypair_from_seed(&[7u8; 32]).unwrap();

    // Typed signature, byte-level verification
    let sig = Dilithium3::sign_deterministic(b"interop", &sk).unwrap();
    assert!(qsign::verify(b"interop", sig.as_ref(), pk.as_ref()));

    // Byte-level signature, typed verification
    let raw = qsign::sign(b"interop", sk.as_ref()).unwrap();
    let sig = DilithiumSignatureData::from_bytes::<qsign::DefaultParams>(&raw).unwrap();
    assert!(Dilithium3::verify(b"interop", &sig, &pk));
}

#[test]
fn test_seeded_keys_match_known_digest() {
    let (pk, sk) = Dilithium3::keypair_from_seed(&[0u8; 32]).unwrap();
    assert_eq!(
        sha3_hex(pk.as_ref()),
        "b0681bf95c4068feb39a3099dbcc299108cc779dbeed196debdea877074a37aa"
    );
    assert_eq!(
        sha3_hex(sk.as_ref()),
        "621bf6e9fdcbfc369b6f8789057b8ad20d2176c5ead9a9f066c1b22dd19710bb"
    );

    let sig = Dilithium3::sign_deterministic(b"known-answer test message", &sk).unwrap();
    assert_eq!(
        sha3_hex(sig.as_ref()),
        "ae2ce593b8cd6e256c93938ccbc0d3919e764821a577a4094ba26fef154d6057"
    );
}

#[test]
fn test_derive_matches_seeded_keygen() {
    let seed = [0x5au8; 32];
    let (pk, sk) = Dilithium5::derive_keypair(&seed).unwrap();
    let (pk2, sk2) = Dilithium5::keypair_from_seed(&seed).unwrap();
    assert_eq!(pk, pk2);
    assert_eq!(sk.as_ref(), sk2.as_ref());
    assert_eq!(Dilithium5::derive_public_key(&sk).unwrap(), pk);

    assert!(matches!(
        Dilithium5::derive_keypair(&seed[..31]),
        Err(Error::InvalidLength { expected: 32, actual: 31, .. })
    ));
}

#[test]
fn test_context_separates_domains() {
    let mut rng = test_rng(11);
    let (pk, sk) = Dilithium2::keypair(&mut rng).unwrap();
    let message = b"contextual message";

    let options = SignOptions::default().with_context(b"protocol-a");
    let sig = Dilithium2::sign_with_rng(message, &sk, &options, &mut rng).unwrap();

    assert!(Dilithium2::verify_with_context(message, b"protocol-a", &sig, &pk));
    assert!(!Dilithium2::verify_with_context(message, b"protocol-b", &sig, &pk));
    assert!(!Dilithium2::verify(message, &sig, &pk));

    let long = [0u8; 256];
    assert!(Dilithium2::sign_with_context(message, &long, &sk).is_err());
    assert!(!Dilithium2::verify_with_context(message, &long, &sig, &pk));
}

#[test]
fn test_hedged_signatures_differ_but_verify() {
    let (pk, sk) = Dilithium2::keypair_from_seed(&[1u8; 32]).unwrap();
    let a = Dilithium2::sign(b"same message", &sk).unwrap();
    let b = Dilithium2::sign(b"same message", &sk).unwrap();
    assert_ne!(a, b);
    assert!(Dilithium2::verify(b"same message", &a, &pk));
    assert!(Dilithium2::verify(b"same message", &b, &pk));

    let d1 = Dilithium2::sign_deterministic(b"same message", &sk).unwrap();
    let d2 = Dilithium2::sign_deterministic(b"same message", &sk).unwrap();
    assert_eq!(d1, d2);
}

#[test]
fn test_signature_sizes_are_fixed() {
    let (_, sk) = Dilithium5::keypair_from_seed(&[2u8; 32]).unwrap();
    for len in [0usize, 1, 64, 4096] {
        let message = vec![0xabu8; len];
        let sig = Dilithium5::sign(&message, &sk).unwrap();
        assert_eq!(sig.len(), Dilithium5::SIGNATURE_SIZE);
    }
}
