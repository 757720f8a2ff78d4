//! Extendable Output Functions (XOF)
//!
//! SHAKE128 and SHAKE256 (FIPS 202) behind a streaming interface: absorb any
//! number of `update` calls, then `squeeze` as many bytes as needed. Once
//! squeezing has started, further absorption is rejected.

use crate::error::{validate, Result};

pub mod shake;

// Re-exports
pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Squeezes output bytes into the provided buffer, continuing the stream
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Convenience method: absorb every slice in order, then squeeze `output.len()` bytes
    fn digest_into(parts: &[&[u8]], output: &mut [u8]) -> Result<()>
    where
        Self: Sized,
    {
        validate::parameter(
            !output.is_empty(),
            "output_length",
            "XOF output length must be greater than 0",
        )?;

        let mut xof = Self::new();
        for part in parts {
            xof.update(part)?;
        }
        xof.squeeze(output)
    }
}
