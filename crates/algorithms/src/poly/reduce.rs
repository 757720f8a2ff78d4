//! Scalar arithmetic modulo q = 8380417
//!
//! Coefficients are kept as signed 32-bit integers in a redundant range and
//! reduced lazily. Montgomery form uses R = 2^32.

use params::pqc::dilithium::DILITHIUM_Q;

/// The prime modulus q
pub const Q: i32 = DILITHIUM_Q;

/// q^-1 mod 2^32
pub const QINV: i32 = 58728449;

/// 2^32 mod q, centered
pub const MONT: i32 = -4186625;

/// Largest absolute value `reduce32` can return
pub const REDUCE32_BOUND: i32 = 6283008;

/// Montgomery reduction: for |a| < 2^31 * q, returns r ≡ a * 2^-32 (mod q)
/// with -q < r < q.
#[inline(always)]
pub fn montgomery_reduce(a: i64) -> i32 {
    let t = (a as i32).wrapping_mul(QINV);
    ((a - t as i64 * Q as i64) >> 32) as i32
}

/// Montgomery multiplication: a * b * 2^-32 mod q
#[inline(always)]
pub fn montgomery_multiply(a: i32, b: i32) -> i32 {
    montgomery_reduce(a as i64 * b as i64)
}

/// For a <= 2^31 - 2^22 - 1, returns r ≡ a (mod q) with |r| <= 6283008.
#[inline(always)]
pub fn reduce32(a: i32) -> i32 {
    let t = (a + (1 << 22)) >> 23;
    a - t * Q
}

/// Adds q if the input is negative.
#[inline(always)]
pub fn caddq(a: i32) -> i32 {
    a + ((a >> 31) & Q)
}

/// Canonical representative in [0, q).
#[inline(always)]
pub fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}
