//! Dilithium-specific sampling of the secret vectors s1, s2, the masking
//! vector y and the challenge c.

use super::polyvec::{PolyVecK, PolyVecL};
use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::sampling::{sample_in_ball, sample_uniform_eta, sample_uniform_gamma1};
use crate::error::Result;
use params::pqc::dilithium::DilithiumSchemeParams;

/// Samples s1 with coefficients in [-η, η], nonces 0..L.
pub fn sample_polyvecl_eta<P: DilithiumSchemeParams>(
    rho_prime: &[u8; 64],
) -> Result<PolyVecL<P>> {
    let mut s1 = PolyVecL::<P>::zero();
    for (i, poly) in s1.polys.iter_mut().enumerate() {
        *poly = sample_uniform_eta(rho_prime, i as u16, P::ETA_S1S2)?;
    }
    Ok(s1)
}

/// Samples s2 with coefficients in [-η, η], nonces L..L+K.
pub fn sample_polyveck_eta<P: DilithiumSchemeParams>(
    rho_prime: &[u8; 64],
) -> Result<PolyVecK<P>> {
    let mut s2 = PolyVecK::<P>::zero();
    for (i, poly) in s2.polys.iter_mut().enumerate() {
        *poly = sample_uniform_eta(rho_prime, (P::L_DIM + i) as u16, P::ETA_S1S2)?;
    }
    Ok(s2)
}

/// Number of attempts κ whose nonces L·κ + i all fit in 16 bits.
///
/// Attempts past this point would reuse the masking vectors of earlier ones.
pub fn distinct_mask_attempts<P: DilithiumSchemeParams>() -> u16 {
    ((u16::MAX as usize + 1) / P::L_DIM) as u16
}

/// Samples the masking vector y for attempt `kappa`.
///
/// Entry i uses nonce L·κ + i, so every attempt draws fresh polynomials.
pub fn sample_polyvecl_gamma1<P: DilithiumSchemeParams>(
    rho_pp: &[u8; 64],
    kappa: u16,
) -> Result<PolyVecL<P>> {
    let mut y = PolyVecL::<P>::zero();
    let base = (P::L_DIM as u16).wrapping_mul(kappa);
    for (i, poly) in y.polys.iter_mut().enumerate() {
        *poly = sample_uniform_gamma1(rho_pp, base.wrapping_add(i as u16), P::GAMMA1_PARAM)?;
    }
    Ok(y)
}

/// Derives the challenge polynomial from the full commitment hash c̃.
pub fn sample_challenge<P: DilithiumSchemeParams>(c_tilde: &[u8]) -> Result<Polynomial> {
    Ok(sample_in_ball(c_tilde, P::TAU_PARAM)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::pqc::dilithium::{Dilithium2Params, Dilithium3Params, Dilithium5Params};

    #[test]
    fn test_secret_vectors_use_disjoint_nonces() {
        let seed = [0u8; 64];
        let s1 = sample_polyvecl_eta::<Dilithium2Params>(&seed).unwrap();
        let s2 = sample_polyveck_eta::<Dilithium2Params>(&seed).unwrap();
        assert_eq!(s1.polys[0], sample_uniform_eta(&seed, 0, 2).unwrap());
        assert_eq!(s2.polys[0], sample_uniform_eta(&seed, 4, 2).unwrap());
        assert!(s1.chknorm(3) && s2.chknorm(3));
    }

    #[test]
    fn test_eta4_bounds() {
        let s1 = sample_polyvecl_eta::<Dilithium3Params>(&[5u8; 64]).unwrap();
        assert!(s1.chknorm(5));
        assert!(s1.polys.iter().any(|p| p.coeffs.iter().any(|&c| c.abs() == 4)));
    }

    #[test]
    fn test_masking_vector_advances_with_kappa() {
        let seed = [1u8; 64];
        let y0 = sample_polyvecl_gamma1::<Dilithium5Params>(&seed, 0).unwrap();
        let y1 = sample_polyvecl_gamma1::<Dilithium5Params>(&seed, 1).unwrap();
        assert_eq!(y1.polys[0], sample_uniform_gamma1(&seed, 7, 1 << 19).unwrap());
        assert!(y0 != y1);
        assert!(y0.chknorm((1 << 19) + 1));
    }

    #[test]
    fn test_last_distinct_attempt_does_not_wrap() {
        assert_eq!(distinct_mask_attempts::<Dilithium2Params>(), 16384);
        assert_eq!(distinct_mask_attempts::<Dilithium3Params>(), 13107);
        assert_eq!(distinct_mask_attempts::<Dilithium5Params>(), 9362);

        let seed = [2u8; 64];
        let last = distinct_mask_attempts::<Dilithium5Params>() - 1;
        let y = sample_polyvecl_gamma1::<Dilithium5Params>(&seed, last).unwrap();
        // 7 * 9361 + 6 = 65533
        assert_eq!(y.polys[6], sample_uniform_gamma1(&seed, 65533, 1 << 19).unwrap());
        let first = sample_polyvecl_gamma1::<Dilithium5Params>(&seed, 0).unwrap();
        assert!(y != first);
    }

    #[test]
    fn test_challenge_weight() {
        let c = sample_challenge::<Dilithium3Params>(&[0x11u8; 48]).unwrap();
        assert_eq!(c.coeffs.iter().filter(|&&v| v != 0).count(), 49);
    }
}
