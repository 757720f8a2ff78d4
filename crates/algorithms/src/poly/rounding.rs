//! Coefficient rounding: Power2Round, Decompose, MakeHint, UseHint
//!
//! All inputs are standard representatives in [0, q) unless stated
//! otherwise. The two supported values of γ2 are (q-1)/88 and (q-1)/32.

use super::reduce::Q;
use params::pqc::dilithium::DILITHIUM_D;

/// γ2 = (q-1)/88
pub const GAMMA2_88: i32 = (Q - 1) / 88;

/// γ2 = (q-1)/32
pub const GAMMA2_32: i32 = (Q - 1) / 32;

/// Splits a into (a1, a0) with a = a1 * 2^d + a0 and -2^(d-1) < a0 <= 2^(d-1).
#[inline]
pub fn power2round(a: i32) -> (i32, i32) {
    let a1 = (a + (1 << (DILITHIUM_D - 1)) - 1) >> DILITHIUM_D;
    (a1, a - (a1 << DILITHIUM_D))
}

/// Splits a into (a1, a0) with a ≡ a1 * 2γ2 + a0 (mod q) and -γ2 < a0 <= γ2,
/// except that when a - a0 = q - 1 the high part wraps to 0 and a0 is
/// decremented.
#[inline]
pub fn decompose(a: i32, gamma2: i32) -> (i32, i32) {
    let mut a1 = (a + 127) >> 7;
    match gamma2 {
        GAMMA2_32 => {
            a1 = (a1 * 1025 + (1 << 21)) >> 22;
            a1 &= 15;
        }
        GAMMA2_88 => {
            a1 = (a1 * 11275 + (1 << 23)) >> 24;
            a1 ^= ((43 - a1) >> 31) & a1;
        }
        _ => return decompose_generic(a, gamma2),
    }

    let mut a0 = a - a1 * 2 * gamma2;
    a0 -= (((Q - 1) / 2 - a0) >> 31) & Q;
    (a1, a0)
}

/// Division-based decomposition valid for any even divisor 2γ2 of q - 1.
pub fn decompose_generic(a: i32, gamma2: i32) -> (i32, i32) {
    let alpha = 2 * gamma2;
    let mut a0 = a.rem_euclid(alpha);
    if a0 > gamma2 {
        a0 -= alpha;
    }
    if a - a0 == Q - 1 {
        (0, a0 - 1)
    } else {
        ((a - a0) / alpha, a0)
    }
}

/// Whether the low part a0 overflows into the high part a1.
#[inline]
pub fn make_hint(a0: i32, a1: i32, gamma2: i32) -> bool {
    a0 > gamma2 || a0 < -gamma2 || (a0 == -gamma2 && a1 != 0)
}

/// Corrects the high bits of a according to a hint bit.
#[inline]
pub fn use_hint(a: i32, hint: bool, gamma2: i32) -> i32 {
    let (a1, a0) = decompose(a, gamma2);
    if !hint {
        return a1;
    }

    let m = (Q - 1) / (2 * gamma2);
    if a0 > 0 {
        if a1 == m - 1 {
            0
        } else {
            a1 + 1
        }
    } else if a1 == 0 {
        m - 1
    } else {
        a1 - 1
    }
}
