//! Essential tests for the Number Theoretic Transform

use super::*;
use crate::poly::reduce::{freeze, montgomery_multiply, Q};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_poly(rng: &mut ChaCha20Rng) -> [i32; N] {
    let mut a = [0i32; N];
    for c in a.iter_mut() {
        *c = rng.gen_range(-Q + 1..Q);
    }
    a
}

/// Negacyclic schoolbook product mod q, canonical output
fn schoolbook(a: &[i32; N], b: &[i32; N]) -> [i32; N] {
    let mut acc = [0i64; N];
    for i in 0..N {
        for j in 0..N {
            let prod = (a[i] as i64 * b[j] as i64) % Q as i64;
            if i + j < N {
                acc[i + j] += prod;
            } else {
                acc[i + j - N] -= prod;
            }
        }
    }
    let mut out = [0i32; N];
    for (o, v) in out.iter_mut().zip(acc.iter()) {
        *o = v.rem_euclid(Q as i64) as i32;
    }
    out
}

fn bit_reverse8(i: usize) -> u32 {
    (i as u8).reverse_bits() as u32
}

fn pow_mod(mut base: i64, mut exp: u32) -> i64 {
    let mut acc = 1i64;
    base %= Q as i64;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = acc * base % Q as i64;
        }
        base = base * base % Q as i64;
        exp >>= 1;
    }
    acc
}

#[test]
fn test_zetas_are_montgomery_powers() {
    let mont = (1i64 << 32) % Q as i64;
    for (i, &z) in ZETAS.iter().enumerate().skip(1) {
        let expected = mont * pow_mod(1753, bit_reverse8(i)) % Q as i64;
        assert_eq!(
            (z as i64).rem_euclid(Q as i64),
            expected,
            "twiddle mismatch at index {}",
            i
        );
        assert!(z.abs() <= Q / 2, "twiddle {} not centered", i);
    }
    assert_eq!(ZETAS[0], 0);
}

#[test]
fn test_root_of_unity_order() {
    // 1753 has order exactly 512 modulo q
    assert_eq!(pow_mod(1753, 512), 1);
    assert_eq!(pow_mod(1753, 256), Q as i64 - 1);
}

#[test]
fn test_roundtrip_carries_montgomery_factor() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let original = random_poly(&mut rng);
    let mut a = original;

    ntt(&mut a);
    invntt_tomont(&mut a);

    let mont = ((1i64 << 32) % Q as i64) as i32;
    for i in 0..N {
        let expected = ((original[i] as i64 * mont as i64).rem_euclid(Q as i64)) as i32;
        assert_eq!(freeze(a[i]), expected, "coefficient {} mismatch", i);
    }
}

#[test]
fn test_forward_output_bound() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..8 {
        let mut a = random_poly(&mut rng);
        ntt(&mut a);
        assert!(a.iter().all(|c| c.abs() < 9 * Q));
    }
}

#[test]
fn test_ntt_multiplication_matches_schoolbook() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
    for _ in 0..3 {
        let a = random_poly(&mut rng);
        let b = random_poly(&mut rng);

        let mut a_hat = a;
        let mut b_hat = b;
        ntt(&mut a_hat);
        ntt(&mut b_hat);

        let mut c = [0i32; N];
        for i in 0..N {
            c[i] = montgomery_multiply(a_hat[i], b_hat[i]);
        }
        invntt_tomont(&mut c);

        let expected = schoolbook(&a, &b);
        for i in 0..N {
            assert_eq!(freeze(c[i]), expected[i], "product mismatch at {}", i);
            assert!(c[i].abs() < Q);
        }
    }
}

#[test]
fn test_ntt_linearity() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let a = random_poly(&mut rng);
    let b = random_poly(&mut rng);
    let mut sum = [0i32; N];
    for i in 0..N {
        sum[i] = freeze(a[i] + b[i]);
    }

    let (mut a_hat, mut b_hat, mut sum_hat) = (a, b, sum);
    ntt(&mut a_hat);
    ntt(&mut b_hat);
    ntt(&mut sum_hat);

    for i in 0..N {
        assert_eq!(
            freeze(sum_hat[i] % Q),
            freeze((a_hat[i] % Q + b_hat[i] % Q) % Q),
            "linearity violation at coefficient {}",
            i
        );
    }
}
