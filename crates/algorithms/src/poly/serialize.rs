//! serialize.rs - Little-endian bit packing of polynomial coefficients
//!
//! Coefficient i occupies bits [i*b, (i+1)*b) of the output, least
//! significant bit first. Callers map signed coefficients to the
//! non-negative field values before packing (e.g. η - c).

use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};
use params::pqc::dilithium::DILITHIUM_N;

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker {
    /// Packs the polynomial's coefficients into `out`, `bits_per_coeff` bits each
    fn pack_coeffs_into(poly: &Polynomial, bits_per_coeff: usize, out: &mut [u8]) -> Result<()>;

    /// Packs the polynomial's coefficients into a new byte vector
    fn pack_coeffs(poly: &Polynomial, bits_per_coeff: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; bytes_required(bits_per_coeff, DILITHIUM_N)];
        Self::pack_coeffs_into(poly, bits_per_coeff, &mut out)?;
        Ok(out)
    }
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker {
    /// Unpacks raw field values (each below 2^bits) into a new polynomial
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: usize) -> Result<()> {
    validate::parameter(
        (1..=24).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 24]",
    )
}

impl CoefficientPacker for DefaultCoefficientSerde {
    fn pack_coeffs_into(poly: &Polynomial, bits_per_coeff: usize, out: &mut [u8]) -> Result<()> {
        check_width(bits_per_coeff)?;
        validate::length(
            "packed polynomial",
            out.len(),
            bytes_required(bits_per_coeff, DILITHIUM_N),
        )?;

        let limit = 1i64 << bits_per_coeff;
        let mut acc: u64 = 0;
        let mut acc_bits = 0;
        let mut pos = 0;
        for &coeff in poly.coeffs.iter() {
            if !(0..limit).contains(&(coeff as i64)) {
                return Err(Error::OutOfRange {
                    context: "coefficient packing",
                    value: coeff as i64,
                });
            }
            acc |= (coeff as u64) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        if acc_bits > 0 {
            out[pos] = acc as u8;
        }
        Ok(())
    }
}

impl CoefficientUnpacker for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial> {
        check_width(bits_per_coeff)?;
        validate::length(
            "packed polynomial",
            bytes.len(),
            bytes_required(bits_per_coeff, DILITHIUM_N),
        )?;

        let mask = (1u64 << bits_per_coeff) - 1;
        let mut poly = Polynomial::zero();
        let mut acc: u64 = 0;
        let mut acc_bits = 0;
        let mut bytes_iter = bytes.iter();
        for coeff in poly.coeffs.iter_mut() {
            while acc_bits < bits_per_coeff {
                // Length was validated above
                let byte = bytes_iter.next().copied().unwrap_or(0);
                acc |= (byte as u64) << acc_bits;
                acc_bits += 8;
            }
            *coeff = (acc & mask) as i32;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }
        Ok(poly)
    }
}

/// Helper function to calculate the number of bytes required for packing
pub const fn bytes_required(bits_per_coeff: usize, n: usize) -> usize {
    (n * bits_per_coeff).div_ceil(8)
}
