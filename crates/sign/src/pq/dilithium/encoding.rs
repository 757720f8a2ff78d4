//! Byte encodings of Dilithium public keys, secret keys and signatures
//!
//! Layouts:
//! - public key: ρ ‖ t1 (10 bits per coefficient)
//! - secret key: ρ ‖ K ‖ tr ‖ s1 ‖ s2 ‖ t0, with s stored as η - c and t0
//!   as 2^(d-1) - c
//! - signature: c̃ ‖ z ‖ h, with z stored as γ1 - c and h as ω index bytes
//!   followed by K cumulative counts
//!
//! Unpacking is strict: any hint section that a packer would not have
//! produced is rejected.

use super::polyvec::{PolyVecK, PolyVecL};
use crate::error::{Error as SignError, Result};
use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
use params::pqc::dilithium::{
    DilithiumSchemeParams, CRH_BYTES, DILITHIUM_D, POLYT0_PACKED_BYTES,
    POLYT1_PACKED_BYTES, SEED_BYTES,
};
use zeroize::Zeroize;

const T1_BITS: usize = 10;
const T0_BITS: usize = DILITHIUM_D as usize;
const T0_OFFSET: i32 = 1 << (DILITHIUM_D - 1);

/// Unpacked secret key. Secret parts are wiped on drop.
pub(crate) struct SecretKeyParts<P: DilithiumSchemeParams> {
    pub rho: [u8; SEED_BYTES],
    pub key: [u8; SEED_BYTES],
    pub tr: [u8; CRH_BYTES],
    pub s1: PolyVecL<P>,
    pub s2: PolyVecK<P>,
    pub t0: PolyVecK<P>,
}

impl<P: DilithiumSchemeParams> Drop for SecretKeyParts<P> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.s1.zeroize();
        self.s2.zeroize();
        self.t0.zeroize();
    }
}

/// Unpacked signature.
pub(crate) struct SignatureParts<P: DilithiumSchemeParams> {
    pub c_tilde: Vec<u8>,
    pub z: PolyVecL<P>,
    pub h: PolyVecK<P>,
}

// ---------------------------------------------------------------------------
// Per-polynomial helpers
// ---------------------------------------------------------------------------

/// Packs `offset - c` for every coefficient c.
fn pack_offset(poly: &Polynomial, offset: i32, bits: usize, out: &mut [u8]) -> Result<()> {
    let mut mapped = Polynomial::zero();
    for (m, &c) in mapped.coeffs.iter_mut().zip(poly.coeffs.iter()) {
        *m = offset - c;
    }
    let res = DefaultCoefficientSerde::pack_coeffs_into(&mapped, bits, out);
    mapped.zeroize();
    Ok(res?)
}

/// Inverse of [`pack_offset`].
fn unpack_offset(bytes: &[u8], offset: i32, bits: usize) -> Result<Polynomial> {
    let mut poly = DefaultCoefficientSerde::unpack_coeffs(bytes, bits)?;
    for c in poly.coeffs.iter_mut() {
        *c = offset - *c;
    }
    Ok(poly)
}

fn unpack_eta<P: DilithiumSchemeParams>(bytes: &[u8]) -> Result<Polynomial> {
    let poly = unpack_offset(bytes, P::ETA_S1S2, P::ETA_BITS)?;
    if poly.coeffs.iter().any(|c| c.abs() > P::ETA_S1S2) {
        return Err(SignError::Deserialization(
            "secret coefficient outside [-eta, eta]".into(),
        ));
    }
    Ok(poly)
}

// ---------------------------------------------------------------------------
// Hint section
// ---------------------------------------------------------------------------

/// Writes the hint vector into `out` (exactly ω + K bytes).
fn pack_hints<P: DilithiumSchemeParams>(h: &PolyVecK<P>, out: &mut [u8]) -> Result<()> {
    let (indices, counts) = out.split_at_mut(P::OMEGA_PARAM);
    indices.fill(0);

    let mut k = 0usize;
    for (i, poly) in h.polys.iter().enumerate() {
        for (j, &bit) in poly.coeffs.iter().enumerate() {
            if bit != 0 {
                if k >= P::OMEGA_PARAM {
                    return Err(SignError::Internal("too many hints for signature".into()));
                }
                indices[k] = j as u8;
                k += 1;
            }
        }
        counts[i] = k as u8;
    }
    Ok(())
}

/// Reads the hint section, rejecting non-canonical encodings.
fn unpack_hints<P: DilithiumSchemeParams>(bytes: &[u8]) -> Result<PolyVecK<P>> {
    let (indices, counts) = bytes.split_at(P::OMEGA_PARAM);
    let mut h = PolyVecK::<P>::zero();

    let mut k = 0usize;
    for (i, &count) in counts.iter().enumerate() {
        let end = count as usize;
        if end < k || end > P::OMEGA_PARAM {
            return Err(SignError::Deserialization("malformed hint counts".into()));
        }
        for j in k..end {
            // Indices within one polynomial must be strictly increasing
            if j > k && indices[j] <= indices[j - 1] {
                return Err(SignError::Deserialization("unordered hint indices".into()));
            }
            h.polys[i].coeffs[indices[j] as usize] = 1;
        }
        k = end;
    }

    if indices[k..].iter().any(|&b| b != 0) {
        return Err(SignError::Deserialization("nonzero hint padding".into()));
    }
    Ok(h)
}

// ---------------------------------------------------------------------------
// Public key
// ---------------------------------------------------------------------------

/// Packs public key ρ ‖ t1.
pub fn pack_public_key<P: DilithiumSchemeParams>(
    rho: &[u8; SEED_BYTES],
    t1: &PolyVecK<P>,
) -> Result<Vec<u8>> {
    let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
    pk[..SEED_BYTES].copy_from_slice(rho);
    for (poly, chunk) in t1
        .polys
        .iter()
        .zip(pk[SEED_BYTES..].chunks_exact_mut(POLYT1_PACKED_BYTES))
    {
        DefaultCoefficientSerde::pack_coeffs_into(poly, T1_BITS, chunk)?;
    }
    Ok(pk)
}

/// Unpacks a public key into (ρ, t1).
pub fn unpack_public_key<P: DilithiumSchemeParams>(
    pk: &[u8],
) -> Result<([u8; SEED_BYTES], PolyVecK<P>)> {
    if pk.len() != P::PUBLIC_KEY_BYTES {
        return Err(SignError::InvalidKeySize {
            expected: P::PUBLIC_KEY_BYTES,
            actual: pk.len(),
        });
    }

    let mut rho = [0u8; SEED_BYTES];
    rho.copy_from_slice(&pk[..SEED_BYTES]);
    let mut t1 = PolyVecK::<P>::zero();
    for (poly, chunk) in t1
        .polys
        .iter_mut()
        .zip(pk[SEED_BYTES..].chunks_exact(POLYT1_PACKED_BYTES))
    {
        *poly = DefaultCoefficientSerde::unpack_coeffs(chunk, T1_BITS)?;
    }
    Ok((rho, t1))
}

// ---------------------------------------------------------------------------
// Secret key
// ---------------------------------------------------------------------------

/// Packs secret key ρ ‖ K ‖ tr ‖ s1 ‖ s2 ‖ t0.
pub fn pack_secret_key<P: DilithiumSchemeParams>(
    rho: &[u8; SEED_BYTES],
    key: &[u8; SEED_BYTES],
    tr: &[u8; CRH_BYTES],
    s1: &PolyVecL<P>,
    s2: &PolyVecK<P>,
    t0: &PolyVecK<P>,
) -> Result<Vec<u8>> {
    let mut sk = vec![0u8; P::SECRET_KEY_BYTES];
    let (seeds, rest) = sk.split_at_mut(2 * SEED_BYTES + CRH_BYTES);
    seeds[..SEED_BYTES].copy_from_slice(rho);
    seeds[SEED_BYTES..2 * SEED_BYTES].copy_from_slice(key);
    seeds[2 * SEED_BYTES..].copy_from_slice(tr);

    let eta_bytes = P::POLY_ETA_PACKED_BYTES;
    let (s1_bytes, rest) = rest.split_at_mut(P::L_DIM * eta_bytes);
    let (s2_bytes, t0_bytes) = rest.split_at_mut(P::K_DIM * eta_bytes);

    for (poly, chunk) in s1.polys.iter().zip(s1_bytes.chunks_exact_mut(eta_bytes)) {
        pack_offset(poly, P::ETA_S1S2, P::ETA_BITS, chunk)?;
    }
    for (poly, chunk) in s2.polys.iter().zip(s2_bytes.chunks_exact_mut(eta_bytes)) {
        pack_offset(poly, P::ETA_S1S2, P::ETA_BITS, chunk)?;
    }
    for (poly, chunk) in t0.polys.iter().zip(t0_bytes.chunks_exact_mut(POLYT0_PACKED_BYTES)) {
        pack_offset(poly, T0_OFFSET, T0_BITS, chunk)?;
    }
    Ok(sk)
}

/// Unpacks a secret key. Secret coefficients outside [-η, η] are rejected.
pub(crate) fn unpack_secret_key<P: DilithiumSchemeParams>(sk: &[u8]) -> Result<SecretKeyParts<P>> {
    if sk.len() != P::SECRET_KEY_BYTES {
        return Err(SignError::InvalidKeySize {
            expected: P::SECRET_KEY_BYTES,
            actual: sk.len(),
        });
    }

    let mut parts = SecretKeyParts::<P> {
        rho: [0u8; SEED_BYTES],
        key: [0u8; SEED_BYTES],
        tr: [0u8; CRH_BYTES],
        s1: PolyVecL::zero(),
        s2: PolyVecK::zero(),
        t0: PolyVecK::zero(),
    };

    let (seeds, rest) = sk.split_at(2 * SEED_BYTES + CRH_BYTES);
    parts.rho.copy_from_slice(&seeds[..SEED_BYTES]);
    parts.key.copy_from_slice(&seeds[SEED_BYTES..2 * SEED_BYTES]);
    parts.tr.copy_from_slice(&seeds[2 * SEED_BYTES..]);

    let eta_bytes = P::POLY_ETA_PACKED_BYTES;
    let (s1_bytes, rest) = rest.split_at(P::L_DIM * eta_bytes);
    let (s2_bytes, t0_bytes) = rest.split_at(P::K_DIM * eta_bytes);

    for (poly, chunk) in parts.s1.polys.iter_mut().zip(s1_bytes.chunks_exact(eta_bytes)) {
        *poly = unpack_eta::<P>(chunk)?;
    }
    for (poly, chunk) in parts.s2.polys.iter_mut().zip(s2_bytes.chunks_exact(eta_bytes)) {
        *poly = unpack_eta::<P>(chunk)?;
    }
    for (poly, chunk) in parts.t0.polys.iter_mut().zip(t0_bytes.chunks_exact(POLYT0_PACKED_BYTES)) {
        *poly = unpack_offset(chunk, T0_OFFSET, T0_BITS)?;
    }
    Ok(parts)
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// Packs signature c̃ ‖ z ‖ h. `z` must already satisfy the norm bound.
pub fn pack_signature<P: DilithiumSchemeParams>(
    c_tilde: &[u8],
    z: &PolyVecL<P>,
    h: &PolyVecK<P>,
) -> Result<Vec<u8>> {
    if c_tilde.len() != P::C_TILDE_BYTES {
        return Err(SignError::Internal("commitment hash has wrong length".into()));
    }

    let mut sig = vec![0u8; P::SIGNATURE_SIZE];
    let (ct, rest) = sig.split_at_mut(P::C_TILDE_BYTES);
    ct.copy_from_slice(c_tilde);

    let z_bytes = P::POLY_Z_PACKED_BYTES;
    let (z_out, h_out) = rest.split_at_mut(P::L_DIM * z_bytes);
    for (poly, chunk) in z.polys.iter().zip(z_out.chunks_exact_mut(z_bytes)) {
        pack_offset(poly, P::GAMMA1_PARAM, P::GAMMA1_BITS, chunk)?;
    }
    pack_hints::<P>(h, h_out)?;
    Ok(sig)
}

/// Unpacks a signature. Only the encoding is validated here; the caller
/// still checks the norm of z.
pub(crate) fn unpack_signature<P: DilithiumSchemeParams>(sig: &[u8]) -> Result<SignatureParts<P>> {
    if sig.len() != P::SIGNATURE_SIZE {
        return Err(SignError::InvalidSignatureSize {
            expected: P::SIGNATURE_SIZE,
            actual: sig.len(),
        });
    }

    let (ct, rest) = sig.split_at(P::C_TILDE_BYTES);
    let z_bytes = P::POLY_Z_PACKED_BYTES;
    let (z_in, h_in) = rest.split_at(P::L_DIM * z_bytes);

    let mut z = PolyVecL::<P>::zero();
    for (poly, chunk) in z.polys.iter_mut().zip(z_in.chunks_exact(z_bytes)) {
        *poly = unpack_offset(chunk, P::GAMMA1_PARAM, P::GAMMA1_BITS)?;
    }
    let h = unpack_hints::<P>(h_in)?;

    Ok(SignatureParts {
        c_tilde: ct.to_vec(),
        z,
        h,
    })
}

/// Packs the high bits w1 for hashing into the commitment.
pub fn pack_polyveck_w1<P: DilithiumSchemeParams>(w1: &PolyVecK<P>) -> Result<Vec<u8>> {
    let w1_bytes = P::POLY_W1_PACKED_BYTES;
    let mut out = vec![0u8; P::K_DIM * w1_bytes];
    for (poly, chunk) in w1.polys.iter().zip(out.chunks_exact_mut(w1_bytes)) {
        DefaultCoefficientSerde::pack_coeffs_into(poly, P::W1_BITS, chunk)?;
    }
    Ok(out)
}
