//! Lattice primitives for the qsign signature engine
//!
//! This crate provides the arithmetic layer the Dilithium protocol is built
//! on:
//!
//! - [`poly::reduce`]: scalar reduction and Montgomery multiplication mod q
//! - [`poly::ntt`]: the forward and inverse number-theoretic transform
//! - [`poly::polynomial`]: the ring element type and its operations
//! - [`poly::sampling`]: deterministic XOF-driven samplers
//! - [`poly::serialize`]: little-endian bit packing of coefficients
//! - [`xof`]: SHAKE128 / SHAKE256 behind a small streaming trait

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Polynomial ring engine
pub mod poly;
pub use poly::polynomial::Polynomial;

// Extendable output functions
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
