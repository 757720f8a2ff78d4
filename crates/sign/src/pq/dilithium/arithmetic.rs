// arithmetic.rs
//! Vector-level rounding for Dilithium: Power2Round, Decompose, MakeHint and
//! UseHint lifted from single polynomials to `PolyVecK`.
//!
//! Inputs to the rounding functions must be standard representatives in
//! [0, q); callers run `caddq` first.

use super::polyvec::PolyVecK;
use algorithms::poly::polynomial::Polynomial;
use params::pqc::dilithium::DilithiumSchemeParams;

/// Splits t into (t1, t0) with t = t1·2^d + t0, t0 ∈ (-2^(d-1), 2^(d-1)].
pub fn power2round_polyvec<P: DilithiumSchemeParams>(
    t: &PolyVecK<P>,
) -> (PolyVecK<P>, PolyVecK<P>) {
    let mut t1 = PolyVecK::<P>::zero();
    let mut t0 = PolyVecK::<P>::zero();
    for i in 0..P::K_DIM {
        let (hi, lo) = t.polys[i].power2round();
        t1.polys[i] = hi;
        t0.polys[i] = lo;
    }
    (t1, t0)
}

/// Splits w into (w1, w0) around multiples of 2γ2.
pub fn decompose_polyvec<P: DilithiumSchemeParams>(
    w: &PolyVecK<P>,
) -> (PolyVecK<P>, PolyVecK<P>) {
    let mut w1 = PolyVecK::<P>::zero();
    let mut w0 = PolyVecK::<P>::zero();
    for i in 0..P::K_DIM {
        let (hi, lo) = w.polys[i].decompose(P::GAMMA2_PARAM);
        w1.polys[i] = hi;
        w0.polys[i] = lo;
    }
    (w1, w0)
}

/// Builds the hint vector for low parts `w0` and high parts `w1`.
///
/// Returns the hint and its total weight; the caller rejects when the
/// weight exceeds ω.
pub fn make_hint_polyveck<P: DilithiumSchemeParams>(
    w0: &PolyVecK<P>,
    w1: &PolyVecK<P>,
) -> (PolyVecK<P>, usize) {
    let mut hint = PolyVecK::<P>::zero();
    let mut weight = 0;
    for i in 0..P::K_DIM {
        let (h, n) = Polynomial::make_hint(&w0.polys[i], &w1.polys[i], P::GAMMA2_PARAM);
        hint.polys[i] = h;
        weight += n;
    }
    (hint, weight)
}

/// Corrects the high bits of `w` with `hint`.
pub fn use_hint_polyveck<P: DilithiumSchemeParams>(
    w: &PolyVecK<P>,
    hint: &PolyVecK<P>,
) -> PolyVecK<P> {
    let mut w1 = PolyVecK::<P>::zero();
    for i in 0..P::K_DIM {
        w1.polys[i] = w.polys[i].use_hint(&hint.polys[i], P::GAMMA2_PARAM);
    }
    w1
}
