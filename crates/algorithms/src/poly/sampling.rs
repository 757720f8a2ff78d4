//! sampling.rs - Deterministic XOF-driven polynomial samplers
//!
//! Every sampler is a pure function of its seed and 16-bit nonce: the nonce
//! is appended to the seed little-endian and the XOF output is consumed in
//! stream order.

use super::polynomial::Polynomial;
use super::reduce::Q;
use super::serialize::{CoefficientUnpacker, DefaultCoefficientSerde};
use crate::error::{validate, Result};
use crate::xof::shake::{SHAKE128_RATE, SHAKE256_RATE};
use crate::xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
use params::pqc::dilithium::DILITHIUM_N;

const N: usize = DILITHIUM_N;

fn seeded_xof<X: ExtendableOutputFunction>(seed: &[u8], nonce: u16) -> Result<X> {
    let mut xof = X::new();
    xof.update(seed)?;
    xof.update(&nonce.to_le_bytes())?;
    Ok(xof)
}

/// Samples a polynomial with coefficients uniform in [0, q).
///
/// Reads SHAKE128(seed ‖ nonce) three bytes at a time, clears the top bit
/// of each 24-bit candidate and rejects candidates ≥ q.
pub fn sample_uniform(seed: &[u8; 32], nonce: u16) -> Result<Polynomial> {
    let mut xof: ShakeXof128 = seeded_xof(seed, nonce)?;
    let mut poly = Polynomial::zero();
    let mut block = [0u8; SHAKE128_RATE];
    let mut ctr = 0;

    while ctr < N {
        xof.squeeze(&mut block)?;
        for chunk in block.chunks_exact(3) {
            let t = (chunk[0] as i32) | ((chunk[1] as i32) << 8) | (((chunk[2] & 0x7F) as i32) << 16);
            if t < Q {
                poly.coeffs[ctr] = t;
                ctr += 1;
                if ctr == N {
                    break;
                }
            }
        }
    }
    Ok(poly)
}

/// Samples a polynomial with coefficients uniform in [-η, η], η ∈ {2, 4}.
///
/// Each byte of SHAKE256(seed ‖ nonce) yields two 4-bit candidates, low
/// nibble first.
pub fn sample_uniform_eta(seed: &[u8; 64], nonce: u16, eta: i32) -> Result<Polynomial> {
    validate::parameter(eta == 2 || eta == 4, "eta", "must be 2 or 4")?;

    let mut xof: ShakeXof256 = seeded_xof(seed, nonce)?;
    let mut poly = Polynomial::zero();
    let mut block = [0u8; SHAKE256_RATE];
    let mut ctr = 0;

    'outer: while ctr < N {
        xof.squeeze(&mut block)?;
        for &byte in block.iter() {
            for t in [(byte & 0x0F) as i32, (byte >> 4) as i32] {
                let accepted = match eta {
                    2 if t < 15 => Some(2 - t % 5),
                    4 if t < 9 => Some(4 - t),
                    _ => None,
                };
                if let Some(c) = accepted {
                    poly.coeffs[ctr] = c;
                    ctr += 1;
                    if ctr == N {
                        break 'outer;
                    }
                }
            }
        }
    }
    Ok(poly)
}

/// Samples the masking polynomial with coefficients in (-γ1, γ1].
///
/// γ1 must be 2^17 or 2^19; SHAKE256(seed ‖ nonce) is read as 256 fields of
/// 18 or 20 bits and each field v maps to γ1 - v. No rejection.
pub fn sample_uniform_gamma1(seed: &[u8; 64], nonce: u16, gamma1: i32) -> Result<Polynomial> {
    let bits = match gamma1 {
        g if g == 1 << 17 => 18,
        g if g == 1 << 19 => 20,
        _ => return Err(crate::Error::param("gamma1", "must be 2^17 or 2^19")),
    };

    let mut xof: ShakeXof256 = seeded_xof(seed, nonce)?;
    let buf = xof.squeeze_into_vec(N * bits / 8)?;
    let mut poly = DefaultCoefficientSerde::unpack_coeffs(&buf, bits)?;
    for c in poly.coeffs.iter_mut() {
        *c = gamma1 - *c;
    }
    Ok(poly)
}

/// Samples the challenge polynomial with exactly τ coefficients in {-1, +1}.
///
/// SHAKE256(c̃): the first 8 bytes are sign bits (little-endian); then for
/// i = N-τ .. N-1 a byte b ≤ i is drawn by rejection, c[i] takes c[b] and
/// c[b] takes the next sign.
pub fn sample_in_ball(c_tilde: &[u8], tau: usize) -> Result<Polynomial> {
    validate::parameter(tau > 0 && tau <= N, "tau", "must be in range [1, 256]")?;

    let mut xof = ShakeXof256::new();
    xof.update(c_tilde)?;
    let mut block = [0u8; SHAKE256_RATE];
    xof.squeeze(&mut block)?;

    let mut signs = 0u64;
    for (i, &byte) in block.iter().take(8).enumerate() {
        signs |= (byte as u64) << (8 * i);
    }
    let mut pos = 8;

    let mut c = Polynomial::zero();
    for i in N - tau..N {
        let b = loop {
            if pos >= SHAKE256_RATE {
                xof.squeeze(&mut block)?;
                pos = 0;
            }
            let b = block[pos] as usize;
            pos += 1;
            if b <= i {
                break b;
            }
        };

        c.coeffs[i] = c.coeffs[b];
        c.coeffs[b] = 1 - 2 * (signs & 1) as i32;
        signs >>= 1;
    }
    Ok(c)
}
