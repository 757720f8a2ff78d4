//! Verification must reject malformed or tampered inputs without panicking

use qsign::prelude::*;
use qsign_params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams,
};
use qsign_tests::{flip_bit, signature_layout};

const MESSAGE: &[u8] = b"tamper target";

fn fixture<P: DilithiumSchemeParams>() -> (DilithiumPublicKey, DilithiumSecretKey, Vec<u8>) {
    let (pk, sk) = Dilithium::<P>::keypair_from_seed(&[9u8; 32]).unwrap();
    let sig = Dilithium::<P>::sign_deterministic(MESSAGE, &sk).unwrap();
    assert!(Dilithium::<P>::verify(MESSAGE, &sig, &pk));
    (pk, sk, sig.to_bytes())
}

fn verify_raw<P: DilithiumSchemeParams>(sig: &[u8], pk: &DilithiumPublicKey) -> bool {
    match DilithiumSignatureData::from_bytes::<P>(sig) {
        Ok(sig) => Dilithium::<P>::verify(MESSAGE, &sig, pk),
        Err(_) => false,
    }
}

fn check_section_flips<P: DilithiumSchemeParams>() {
    let (pk, _, sig) = fixture::<P>();
    let (c_end, z_end, _) = signature_layout::<P>();

    // challenge hash, first z coefficient, a middle z byte
    for bit in [0, 8 * c_end + 3, 8 * (c_end + z_end) / 2] {
        assert!(!verify_raw::<P>(&flip_bit(&sig, bit), &pk), "{} bit {}", P::NAME, bit);
    }
}

fn check_hint_section<P: DilithiumSchemeParams>() {
    let (pk, _, sig) = fixture::<P>();
    let (_, z_end, total) = signature_layout::<P>();

    // cumulative count beyond omega
    let mut bad = sig.clone();
    bad[total - 1] = (P::OMEGA_PARAM + 1) as u8;
    assert!(!verify_raw::<P>(&bad, &pk), "{} count > omega", P::NAME);

    // last index slot: either padding that must stay zero, or a real index
    let mut bad = sig.clone();
    bad[z_end + P::OMEGA_PARAM - 1] ^= 0xff;
    assert!(!verify_raw::<P>(&bad, &pk), "{} hint slot", P::NAME);
}

#[test]
fn test_bit_flips_rejected() {
    check_section_flips::<Dilithium2Params>();
    check_section_flips::<Dilithium3Params>();
    check_section_flips::<Dilithium5Params>();
}

#[test]
fn test_hint_tampering_rejected() {
    check_hint_section::<Dilithium2Params>();
    check_hint_section::<Dilithium3Params>();
    check_hint_section::<Dilithium5Params>();
}

#[test]
fn test_wrong_lengths_rejected() {
    let (pk, sk, sig) = fixture::<Dilithium3Params>();
    let pk = pk.to_bytes();
    let sk = sk.to_bytes();

    assert!(!qsign::verify(MESSAGE, &sig[..sig.len() - 1], &pk));
    let mut long = sig.clone();
    long.push(0);
    assert!(!qsign::verify(MESSAGE, &long, &pk));
    assert!(!qsign::verify(MESSAGE, &sig, &pk[..pk.len() - 1]));

    // a level 2 public key is not a level 3 public key
    let (pk2, _) = Dilithium2::keypair_from_seed(&[9u8; 32]).unwrap();
    assert!(!qsign::verify(MESSAGE, &sig, pk2.as_ref()));

    assert!(matches!(
        qsign::sign(MESSAGE, &sk[1..]),
        Err(Error::InvalidLength { context: "key", .. })
    ));
}

#[test]
fn test_zero_and_garbage_inputs_rejected() {
    let (pk, _, _) = fixture::<Dilithium2Params>();
    assert!(!verify_raw::<Dilithium2Params>(&vec![0u8; Dilithium2::SIGNATURE_SIZE], &pk));
    assert!(!verify_raw::<Dilithium2Params>(&vec![0xffu8; Dilithium2::SIGNATURE_SIZE], &pk));

    let garbage_pk =
        DilithiumPublicKey::from_bytes::<Dilithium2Params>(&vec![0x5au8; Dilithium2::PUBLIC_KEY_SIZE])
            .unwrap();
    let (_, _, sig) = fixture::<Dilithium2Params>();
    assert!(!verify_raw::<Dilithium2Params>(&sig, &garbage_pk));
}

#[test]
fn test_tampered_secret_key_rejected() {
    let (_, sk, _) = fixture::<Dilithium2Params>();
    let mut bytes = sk.to_bytes();
    // inside tr
    bytes[64 + 5] ^= 1;
    let tampered = DilithiumSecretKey::from_bytes::<Dilithium2Params>(&bytes).unwrap();
    assert!(Dilithium2::derive_public_key(&tampered).is_err());

    // an s1 coefficient outside [-eta, eta] cannot be signed with
    let mut bytes = sk.to_bytes();
    bytes[128] = 0xff;
    let tampered = DilithiumSecretKey::from_bytes::<Dilithium2Params>(&bytes).unwrap();
    assert!(Dilithium2::sign(MESSAGE, &tampered).is_err());
}
