//! Shared helpers for the qsign integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha3::{Digest, Sha3_256};

/// Seeded RNG so failures are reproducible
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Hex SHA3-256 of `data`, used to pin long byte strings in known-answer tests
pub fn sha3_hex(data: &[u8]) -> String {
    hex::encode(Sha3_256::digest(data))
}

/// Returns a copy of `bytes` with one bit flipped.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Byte offsets of the sections of an encoded signature:
/// `(c_tilde_end, z_end, total)`.
pub fn signature_layout<P: qsign_params::pqc::dilithium::DilithiumSchemeParams>(
) -> (usize, usize, usize) {
    let c_end = P::C_TILDE_BYTES;
    let z_end = c_end + P::L_DIM * P::POLY_Z_PACKED_BYTES;
    (c_end, z_end, P::SIGNATURE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsign_params::pqc::dilithium::{Dilithium2Params, Dilithium3Params, Dilithium5Params};

    #[test]
    fn test_flip_bit() {
        assert_eq!(flip_bit(&[0u8, 0], 9), vec![0, 2]);
    }

    #[test]
    fn test_signature_layout_hint_section() {
        let (_, z_end, total) = signature_layout::<Dilithium2Params>();
        assert_eq!(total - z_end, 80 + 4);
        let (_, z_end, total) = signature_layout::<Dilithium3Params>();
        assert_eq!(total - z_end, 55 + 6);
        let (_, z_end, total) = signature_layout::<Dilithium5Params>();
        assert_eq!(total - z_end, 75 + 8);
    }
}
