//! Core implementation of Dilithium key generation, signing, and verification (FIPS 204).
//!
//! Implements lattice-based signatures using Fiat-Shamir with Aborts.
//! Security based on Module-LWE and Module-SIS problems.
//!
//! Rejection conditions, checked in order on every attempt:
//! - `||z||∞ < γ1 - β`
//! - `||w0 - cs2||∞ < γ2 - β`
//! - `||ct0||∞ < γ2`
//! - hint weight `≤ ω`
//!
//! Polynomial domains are tracked by hand: values with a `_hat` suffix are
//! in NTT domain, everything else is in standard domain.
//!
//! Internal module - use public `Dilithium2/3/5` types instead.

use super::arithmetic::{
    decompose_polyvec, make_hint_polyveck, power2round_polyvec, use_hint_polyveck,
};
use super::encoding::{
    pack_polyveck_w1, pack_public_key, pack_secret_key, pack_signature, unpack_public_key,
    unpack_secret_key, unpack_signature,
};
use super::polyvec::{expand_matrix, matrix_pointwise_montgomery, MatrixA, PolyVecK, PolyVecL};
use super::sampling::{
    distinct_mask_attempts, sample_challenge, sample_polyvecl_gamma1, sample_polyveck_eta,
    sample_polyvecl_eta,
};

use crate::error::{Error as SignError, Result};
use algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use log::{debug, trace, warn};
use params::pqc::dilithium::{DilithiumSchemeParams, CRH_BYTES, MAX_CONTEXT_BYTES, SEED_BYTES};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// t = A·s1 + s2 in standard domain with coefficients in [0, q).
fn compute_t<P: DilithiumSchemeParams>(
    matrix_a_hat: &MatrixA<P>,
    s1: &PolyVecL<P>,
    s2: &PolyVecK<P>,
) -> PolyVecK<P> {
    let mut s1_hat = s1.clone();
    s1_hat.ntt_inplace();

    let mut t = matrix_pointwise_montgomery(matrix_a_hat, &s1_hat);
    t.reduce();
    t.invntt_tomont_inplace();
    t.add_assign(s2);
    t.reduce();
    t.caddq();

    s1_hat.zeroize();
    t
}

/// μ = SHAKE256(tr ‖ 0 ‖ |ctx| ‖ ctx ‖ M, 64)
fn message_representative(tr: &[u8], ctx: &[u8], message: &[u8]) -> Result<[u8; CRH_BYTES]> {
    let prefix = [0u8, ctx.len() as u8];
    let mut mu = [0u8; CRH_BYTES];
    ShakeXof256::digest_into(&[tr, &prefix[..], ctx, message], &mut mu)?;
    Ok(mu)
}

/// c̃ = SHAKE256(μ ‖ w1_packed, λ/4)
fn commitment_hash<P: DilithiumSchemeParams>(
    mu: &[u8; CRH_BYTES],
    w1: &PolyVecK<P>,
) -> Result<Vec<u8>> {
    let w1_packed = pack_polyveck_w1::<P>(w1)?;
    let mut c_tilde = vec![0u8; P::C_TILDE_BYTES];
    ShakeXof256::digest_into(&[&mu[..], &w1_packed[..]], &mut c_tilde)?;
    Ok(c_tilde)
}

/// Key Generation (ML-DSA.KeyGen_internal)
///
/// Generates (pk, sk) where pk = (ρ, t1) and sk = (ρ, K, tr, s1, s2, t0),
/// entirely determined by the 32-byte seed ξ.
pub(crate) fn keypair_internal<P: DilithiumSchemeParams>(
    xi: &[u8; SEED_BYTES],
) -> Result<(Vec<u8>, Vec<u8>)> {
    // (ρ, ρ', K) = H(ξ ‖ k ‖ l)
    let mut seeds = Zeroizing::new([0u8; 2 * SEED_BYTES + CRH_BYTES]);
    let dims = [P::K_DIM as u8, P::L_DIM as u8];
    ShakeXof256::digest_into(&[&xi[..], &dims[..]], &mut seeds[..])?;

    let mut rho = [0u8; SEED_BYTES];
    let mut rho_prime = Zeroizing::new([0u8; CRH_BYTES]);
    let mut key = Zeroizing::new([0u8; SEED_BYTES]);
    rho.copy_from_slice(&seeds[..SEED_BYTES]);
    rho_prime.copy_from_slice(&seeds[SEED_BYTES..SEED_BYTES + CRH_BYTES]);
    key.copy_from_slice(&seeds[SEED_BYTES + CRH_BYTES..]);

    let matrix_a_hat = expand_matrix::<P>(&rho)?;
    let mut s1 = sample_polyvecl_eta::<P>(&rho_prime)?;
    let mut s2 = sample_polyveck_eta::<P>(&rho_prime)?;

    let t = compute_t(&matrix_a_hat, &s1, &s2);
    let (t1, mut t0) = power2round_polyvec(&t);

    let pk = pack_public_key::<P>(&rho, &t1)?;

    // tr = H(pk, 64)
    let mut tr = [0u8; CRH_BYTES];
    ShakeXof256::digest_into(&[pk.as_slice()], &mut tr)?;

    let sk = pack_secret_key::<P>(&rho, &key, &tr, &s1, &s2, &t0);

    s1.zeroize();
    s2.zeroize();
    t0.zeroize();

    let sk = sk?;
    debug!("{} key pair generated", P::NAME);
    Ok((pk, sk))
}

/// Signing (ML-DSA.Sign_internal with the pure-mode message prefix)
///
/// Produces signature (c̃, z, h). Each attempt κ draws a fresh masking
/// vector; the loop gives up after `max_attempts` rejections, capped at
/// the number of distinct masking vectors.
pub(crate) fn sign_internal<P: DilithiumSchemeParams>(
    message: &[u8],
    sk_bytes: &[u8],
    context: &[u8],
    rnd: &[u8; SEED_BYTES],
    max_attempts: u16,
) -> Result<Vec<u8>> {
    if context.len() > MAX_CONTEXT_BYTES {
        return Err(SignError::InvalidParameter(format!(
            "context must be at most {} bytes, got {}",
            MAX_CONTEXT_BYTES,
            context.len()
        )));
    }
    if max_attempts == 0 {
        return Err(SignError::InvalidParameter(
            "max_attempts must be at least 1".into(),
        ));
    }
    let max_attempts = max_attempts.min(distinct_mask_attempts::<P>());

    let sk = unpack_secret_key::<P>(sk_bytes)?;

    let mu = message_representative(&sk.tr, context, message)?;

    // ρ'' = H(K ‖ rnd ‖ μ, 64)
    let mut rho_pp = Zeroizing::new([0u8; CRH_BYTES]);
    ShakeXof256::digest_into(&[&sk.key[..], &rnd[..], &mu[..]], &mut rho_pp[..])?;

    let matrix_a_hat = expand_matrix::<P>(&sk.rho)?;

    let mut s1_hat = sk.s1.clone();
    s1_hat.ntt_inplace();
    let mut s2_hat = sk.s2.clone();
    s2_hat.ntt_inplace();
    let mut t0_hat = sk.t0.clone();
    t0_hat.ntt_inplace();

    let result = rejection_loop::<P>(&matrix_a_hat, &mu, &rho_pp, &s1_hat, &s2_hat, &t0_hat, max_attempts);

    s1_hat.zeroize();
    s2_hat.zeroize();
    t0_hat.zeroize();

    result
}

fn rejection_loop<P: DilithiumSchemeParams>(
    matrix_a_hat: &MatrixA<P>,
    mu: &[u8; CRH_BYTES],
    rho_pp: &[u8; CRH_BYTES],
    s1_hat: &PolyVecL<P>,
    s2_hat: &PolyVecK<P>,
    t0_hat: &PolyVecK<P>,
    max_attempts: u16,
) -> Result<Vec<u8>> {
    for kappa in 0..max_attempts {
        let attempt = kappa + 1;

        // y and w = A·y
        let mut y = sample_polyvecl_gamma1::<P>(rho_pp, kappa)?;
        let mut y_hat = y.clone();
        y_hat.ntt_inplace();

        let mut w = matrix_pointwise_montgomery(matrix_a_hat, &y_hat);
        y_hat.zeroize();
        w.reduce();
        w.invntt_tomont_inplace();
        w.caddq();
        let (w1, mut w0) = decompose_polyvec(&w);

        let c_tilde = commitment_hash::<P>(mu, &w1)?;
        let mut c_hat = sample_challenge::<P>(&c_tilde)?;
        c_hat.ntt_inplace();

        // z = y + c·s1
        let mut z = s1_hat.pointwise_poly_montgomery(&c_hat);
        z.invntt_tomont_inplace();
        z.add_assign(&y);
        y.zeroize();
        z.reduce();
        if !z.chknorm(P::GAMMA1_PARAM - P::BETA_PARAM) {
            trace!("{} attempt {}: z exceeds gamma1 - beta", P::NAME, attempt);
            continue;
        }

        // r0 = w0 - c·s2
        let mut cs2 = s2_hat.pointwise_poly_montgomery(&c_hat);
        cs2.invntt_tomont_inplace();
        w0.sub_assign(&cs2);
        cs2.zeroize();
        w0.reduce();
        if !w0.chknorm(P::GAMMA2_PARAM - P::BETA_PARAM) {
            trace!("{} attempt {}: low bits exceed gamma2 - beta", P::NAME, attempt);
            continue;
        }

        // c·t0
        let mut ct0 = t0_hat.pointwise_poly_montgomery(&c_hat);
        ct0.invntt_tomont_inplace();
        ct0.reduce();
        if !ct0.chknorm(P::GAMMA2_PARAM) {
            trace!("{} attempt {}: c*t0 exceeds gamma2", P::NAME, attempt);
            continue;
        }

        w0.add_assign(&ct0);
        let (hint, weight) = make_hint_polyveck(&w0, &w1);
        if weight > P::OMEGA_PARAM {
            trace!("{} attempt {}: {} hints exceed omega", P::NAME, attempt, weight);
            continue;
        }

        let sig = pack_signature::<P>(&c_tilde, &z, &hint)?;
        debug!("{} signature produced after {} attempt(s)", P::NAME, attempt);
        return Ok(sig);
    }

    warn!("{} signing gave up after {} attempts", P::NAME, max_attempts);
    Err(SignError::AttemptsExhausted {
        algorithm: P::NAME,
        attempts: max_attempts,
    })
}

/// Verification (ML-DSA.Verify_internal with the pure-mode message prefix)
///
/// Every malformed input is a rejection; this never errors.
pub(crate) fn verify_internal<P: DilithiumSchemeParams>(
    message: &[u8],
    sig_bytes: &[u8],
    pk_bytes: &[u8],
    context: &[u8],
) -> bool {
    match try_verify::<P>(message, sig_bytes, pk_bytes, context) {
        Ok(valid) => valid,
        Err(e) => {
            warn!("{} verify rejected malformed input: {}", P::NAME, e);
            false
        }
    }
}

fn try_verify<P: DilithiumSchemeParams>(
    message: &[u8],
    sig_bytes: &[u8],
    pk_bytes: &[u8],
    context: &[u8],
) -> Result<bool> {
    if context.len() > MAX_CONTEXT_BYTES {
        return Err(SignError::InvalidParameter("context too long".into()));
    }
    if pk_bytes.len() != P::PUBLIC_KEY_BYTES {
        return Err(SignError::InvalidKeySize {
            expected: P::PUBLIC_KEY_BYTES,
            actual: pk_bytes.len(),
        });
    }
    if sig_bytes.len() != P::SIGNATURE_SIZE {
        return Err(SignError::InvalidSignatureSize {
            expected: P::SIGNATURE_SIZE,
            actual: sig_bytes.len(),
        });
    }

    let (rho, mut t1) = unpack_public_key::<P>(pk_bytes)?;
    let sig = unpack_signature::<P>(sig_bytes)?;

    if !sig.z.chknorm(P::GAMMA1_PARAM - P::BETA_PARAM) {
        trace!("{} verify: z exceeds gamma1 - beta", P::NAME);
        return Ok(false);
    }

    let mut tr = [0u8; CRH_BYTES];
    ShakeXof256::digest_into(&[pk_bytes], &mut tr)?;
    let mu = message_representative(&tr, context, message)?;

    let mut c_hat = sample_challenge::<P>(&sig.c_tilde)?;
    c_hat.ntt_inplace();
    let matrix_a_hat = expand_matrix::<P>(&rho)?;

    // w' = A·z - c·t1·2^d
    let mut z_hat = sig.z.clone();
    z_hat.ntt_inplace();
    let mut w = matrix_pointwise_montgomery(&matrix_a_hat, &z_hat);

    t1.shiftl();
    t1.ntt_inplace();
    let ct1 = t1.pointwise_poly_montgomery(&c_hat);

    w.sub_assign(&ct1);
    w.reduce();
    w.invntt_tomont_inplace();
    w.caddq();

    let w1 = use_hint_polyveck(&w, &sig.h);
    let c_tilde = commitment_hash::<P>(&mu, &w1)?;

    Ok(bool::from(c_tilde.as_slice().ct_eq(sig.c_tilde.as_slice())))
}

/// Recomputes the public key from a secret key.
///
/// The embedded tr must match H(pk); otherwise the key is inconsistent.
pub(crate) fn public_key_from_secret_key<P: DilithiumSchemeParams>(sk_bytes: &[u8]) -> Result<Vec<u8>> {
    let sk = unpack_secret_key::<P>(sk_bytes)?;
    let matrix_a_hat = expand_matrix::<P>(&sk.rho)?;

    let t = compute_t(&matrix_a_hat, &sk.s1, &sk.s2);
    let (t1, mut t0) = power2round_polyvec(&t);
    let pk = pack_public_key::<P>(&sk.rho, &t1)?;

    let mut tr = [0u8; CRH_BYTES];
    ShakeXof256::digest_into(&[pk.as_slice()], &mut tr)?;

    let consistent = tr[..].ct_eq(&sk.tr[..]) & t0_matches(&t0, &sk.t0);
    t0.zeroize();
    if !bool::from(consistent) {
        return Err(SignError::InvalidKey(
            "secret key does not match its embedded public key hash".into(),
        ));
    }
    Ok(pk)
}

fn t0_matches<P: DilithiumSchemeParams>(a: &PolyVecK<P>, b: &PolyVecK<P>) -> subtle::Choice {
    let mut eq = subtle::Choice::from(1u8);
    for (pa, pb) in a.polys.iter().zip(b.polys.iter()) {
        for (x, y) in pa.coeffs.iter().zip(pb.coeffs.iter()) {
            eq &= x.ct_eq(y);
        }
    }
    eq
}
