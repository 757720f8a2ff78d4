//! polynomial.rs - Ring elements of Z_q[X]/(X^256 + 1)

use super::ntt;
use super::reduce::{self, montgomery_multiply, Q};
use super::rounding;
use params::pqc::dilithium::{DILITHIUM_D, DILITHIUM_N};
use zeroize::Zeroize;

const N: usize = DILITHIUM_N;

/// A polynomial with 256 signed coefficients.
///
/// Coefficients are not kept canonical: most operations leave them in a
/// redundant range and callers reduce explicitly with [`reduce`],
/// [`caddq`] or [`freeze`] before anything range-sensitive.
///
/// [`reduce`]: Polynomial::reduce
/// [`caddq`]: Polynomial::caddq
/// [`freeze`]: Polynomial::freeze
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients, lowest degree first
    pub coeffs: [i32; N],
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Polynomial {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Reduces every coefficient into [-6283008, 6283008]
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce::reduce32(*c);
        }
    }

    /// Adds q to every negative coefficient
    pub fn caddq(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce::caddq(*c);
        }
    }

    /// Brings every coefficient into [0, q)
    pub fn freeze(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = reduce::freeze(*c);
        }
    }

    /// Coefficient-wise addition without reduction
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// In-place coefficient-wise addition without reduction
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += *b;
        }
    }

    /// Coefficient-wise subtraction without reduction
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.sub_assign(other);
        result
    }

    /// In-place coefficient-wise subtraction without reduction
    pub fn sub_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a -= *b;
        }
    }

    /// Multiplies every coefficient by 2^d without reduction
    pub fn shiftl(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c <<= DILITHIUM_D;
        }
    }

    /// Forward NTT in place
    pub fn ntt_inplace(&mut self) {
        ntt::ntt(&mut self.coeffs);
    }

    /// Inverse NTT in place, output multiplied by 2^32
    pub fn invntt_tomont_inplace(&mut self) {
        ntt::invntt_tomont(&mut self.coeffs);
    }

    /// Pointwise Montgomery product of two NTT-domain polynomials
    pub fn pointwise_montgomery(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.coeffs[i] = montgomery_multiply(self.coeffs[i], other.coeffs[i]);
        }
        result
    }

    /// Infinity-norm check on a reduced polynomial.
    ///
    /// Returns `true` when every centered coefficient is strictly below
    /// `bound`. Bounds above (q-1)/8 always fail. The scan does not exit
    /// early so its running time is independent of where a violation sits.
    pub fn chknorm(&self, bound: i32) -> bool {
        if bound > (Q - 1) / 8 {
            return false;
        }

        let mut within = true;
        for &a in self.coeffs.iter() {
            // Absolute value without branching on the sign
            let t = a >> 31;
            let abs = a - (t & (2 * a));
            within &= abs < bound;
        }
        within
    }

    /// Power2Round on every coefficient, returning (high, low).
    ///
    /// Coefficients must be standard representatives.
    pub fn power2round(&self) -> (Self, Self) {
        let mut a1 = Self::zero();
        let mut a0 = Self::zero();
        for i in 0..N {
            let (hi, lo) = rounding::power2round(self.coeffs[i]);
            a1.coeffs[i] = hi;
            a0.coeffs[i] = lo;
        }
        (a1, a0)
    }

    /// Decompose on every coefficient, returning (high, low).
    ///
    /// Coefficients must be standard representatives.
    pub fn decompose(&self, gamma2: i32) -> (Self, Self) {
        let mut a1 = Self::zero();
        let mut a0 = Self::zero();
        for i in 0..N {
            let (hi, lo) = rounding::decompose(self.coeffs[i], gamma2);
            a1.coeffs[i] = hi;
            a0.coeffs[i] = lo;
        }
        (a1, a0)
    }

    /// Computes the hint polynomial for low part `a0` and high part `a1`.
    ///
    /// Returns the hint (coefficients 0/1) and its weight.
    pub fn make_hint(a0: &Self, a1: &Self, gamma2: i32) -> (Self, usize) {
        let mut hint = Self::zero();
        let mut weight = 0;
        for i in 0..N {
            let bit = rounding::make_hint(a0.coeffs[i], a1.coeffs[i], gamma2);
            hint.coeffs[i] = bit as i32;
            weight += bit as usize;
        }
        (hint, weight)
    }

    /// Applies a hint polynomial to recover corrected high bits.
    ///
    /// Coefficients of `self` must be standard representatives.
    pub fn use_hint(&self, hint: &Self, gamma2: i32) -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.coeffs[i] = rounding::use_hint(self.coeffs[i], hint.coeffs[i] != 0, gamma2);
        }
        result
    }
}
