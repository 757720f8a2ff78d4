//! Polynomial vector types and operations specific to Dilithium.

use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::sampling::sample_uniform;
use crate::error::Result;
use params::pqc::dilithium::DilithiumSchemeParams;
use core::marker::PhantomData;
use zeroize::Zeroize;

/// A vector of polynomials for dimension L (columns in matrix A)
#[derive(Debug)]
pub struct PolyVecL<P: DilithiumSchemeParams> {
    pub(crate) polys: Vec<Polynomial>,
    _params: PhantomData<P>,
}

/// A vector of polynomials for dimension K (rows in matrix A)
#[derive(Debug)]
pub struct PolyVecK<P: DilithiumSchemeParams> {
    pub(crate) polys: Vec<Polynomial>,
    _params: PhantomData<P>,
}

/// The public matrix A in NTT domain, K rows of L polynomials.
pub type MatrixA<P> = Vec<PolyVecL<P>>;

macro_rules! impl_polyvec {
    ($name:ident, $dim:ident) => {
        // Implement Clone manually to avoid a `P: Clone` bound
        impl<P: DilithiumSchemeParams> Clone for $name<P> {
            fn clone(&self) -> Self {
                Self {
                    polys: self.polys.clone(),
                    _params: PhantomData,
                }
            }
        }

        impl<P: DilithiumSchemeParams> PartialEq for $name<P> {
            fn eq(&self, other: &Self) -> bool {
                self.polys == other.polys
            }
        }

        impl<P: DilithiumSchemeParams> Zeroize for $name<P> {
            fn zeroize(&mut self) {
                for poly in self.polys.iter_mut() {
                    poly.zeroize();
                }
            }
        }

        impl<P: DilithiumSchemeParams> $name<P> {
            /// Creates a vector with all polynomial coefficients set to zero.
            pub fn zero() -> Self {
                Self {
                    polys: vec![Polynomial::zero(); P::$dim],
                    _params: PhantomData,
                }
            }

            /// Forward NTT on every entry.
            pub fn ntt_inplace(&mut self) {
                for p in self.polys.iter_mut() {
                    p.ntt_inplace();
                }
            }

            /// Inverse NTT (with Montgomery factor) on every entry.
            pub fn invntt_tomont_inplace(&mut self) {
                for p in self.polys.iter_mut() {
                    p.invntt_tomont_inplace();
                }
            }

            /// Reduces every coefficient to a small representative.
            pub fn reduce(&mut self) {
                for p in self.polys.iter_mut() {
                    p.reduce();
                }
            }

            /// Adds q to every negative coefficient.
            pub fn caddq(&mut self) {
                for p in self.polys.iter_mut() {
                    p.caddq();
                }
            }

            /// Multiplies every coefficient by `2^d`.
            pub fn shiftl(&mut self) {
                for p in self.polys.iter_mut() {
                    p.shiftl();
                }
            }

            /// Element-wise `self += other`.
            pub fn add_assign(&mut self, other: &Self) {
                for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
                    a.add_assign(b);
                }
            }

            /// Element-wise `self -= other`.
            pub fn sub_assign(&mut self, other: &Self) {
                for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
                    a.sub_assign(b);
                }
            }

            /// Multiplies each entry by one NTT-domain polynomial.
            /// Both operands are in NTT domain.
            pub fn pointwise_poly_montgomery(&self, scalar_ntt: &Polynomial) -> Self {
                let mut res = Self::zero();
                for (r, p) in res.polys.iter_mut().zip(self.polys.iter()) {
                    *r = scalar_ntt.pointwise_montgomery(p);
                }
                res
            }

            /// Infinity-norm check over the whole vector.
            ///
            /// Every entry is checked so the result does not reveal which
            /// polynomial failed.
            pub fn chknorm(&self, bound: i32) -> bool {
                self.polys
                    .iter()
                    .fold(true, |within, p| within & p.chknorm(bound))
            }
        }
    };
}

impl_polyvec!(PolyVecL, L_DIM);
impl_polyvec!(PolyVecK, K_DIM);

impl<P: DilithiumSchemeParams> PolyVecL<P> {
    /// Computes the pointwise product of two PolyVecs and accumulates into a single polynomial.
    /// Result = sum_{i=0}^{L_DIM-1} (self.polys[i] * other.polys[i]).
    /// Both inputs must be in NTT domain; result is also in NTT domain.
    pub fn pointwise_acc_montgomery(&self, other: &PolyVecL<P>) -> Polynomial {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.add_assign(&a.pointwise_montgomery(b));
        }
        acc
    }
}

/// Expands the seed `rho` into matrix A (K_DIM rows, L_DIM columns), NTT domain.
///
/// Entry A[i][j] is `sample_uniform(rho, 256*i + j)`, i.e. SHAKE128(ρ ‖ j ‖ i).
pub fn expand_matrix<P: DilithiumSchemeParams>(rho: &[u8; 32]) -> Result<MatrixA<P>> {
    let mut matrix = Vec::with_capacity(P::K_DIM);
    for i in 0..P::K_DIM {
        let mut row = PolyVecL::<P>::zero();
        for (j, poly) in row.polys.iter_mut().enumerate() {
            *poly = sample_uniform(rho, ((i << 8) + j) as u16)?;
        }
        matrix.push(row);
    }
    Ok(matrix)
}

/// Matrix-vector multiplication: A_hat * vec_l
/// where A_hat is a K×L matrix of polynomials in NTT domain
/// and vec_l is an L-vector of polynomials in NTT domain.
/// Result is a K-vector of polynomials in NTT domain.
pub fn matrix_pointwise_montgomery<P: DilithiumSchemeParams>(
    matrix_a_hat: &MatrixA<P>,
    vector_l_hat: &PolyVecL<P>,
) -> PolyVecK<P> {
    let mut result = PolyVecK::<P>::zero();
    for (out, row) in result.polys.iter_mut().zip(matrix_a_hat.iter()) {
        *out = row.pointwise_acc_montgomery(vector_l_hat);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorithms::poly::reduce::Q;
    use params::pqc::dilithium::{Dilithium2Params, Dilithium5Params};

    #[test]
    fn test_expand_matrix_shape_and_range() {
        let a = expand_matrix::<Dilithium5Params>(&[3u8; 32]).unwrap();
        assert_eq!(a.len(), 8);
        for row in &a {
            assert_eq!(row.polys.len(), 7);
            for p in &row.polys {
                assert!(p.coeffs.iter().all(|&c| (0..Q).contains(&c)));
            }
        }
    }

    #[test]
    fn test_expand_matrix_is_deterministic() {
        let a = expand_matrix::<Dilithium2Params>(&[9u8; 32]).unwrap();
        let b = expand_matrix::<Dilithium2Params>(&[9u8; 32]).unwrap();
        assert!(a == b);
        // Entries use distinct nonces
        assert_ne!(a[0].polys[1], a[1].polys[0]);
        assert_eq!(a[1].polys[2], sample_uniform(&[9u8; 32], 0x0102).unwrap());
    }

    #[test]
    fn test_matrix_times_zero_is_zero() {
        let a = expand_matrix::<Dilithium2Params>(&[1u8; 32]).unwrap();
        let v = PolyVecL::<Dilithium2Params>::zero();
        let r = matrix_pointwise_montgomery(&a, &v);
        assert!(r.polys.iter().all(|p| p.coeffs.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_chknorm_checks_every_entry() {
        let mut v = PolyVecK::<Dilithium2Params>::zero();
        assert!(v.chknorm(1));
        v.polys[3].coeffs[255] = -5;
        assert!(!v.chknorm(5));
        assert!(v.chknorm(6));
    }
}
