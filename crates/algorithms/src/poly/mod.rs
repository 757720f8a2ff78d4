// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial Engine
//!
//! Arithmetic in R_q = Z_q[X]/(X^256 + 1) with q = 8380417: scalar
//! reduction, the NTT, the polynomial type, rounding with hints,
//! deterministic samplers and coefficient packing.

pub mod ntt;
pub mod polynomial;
pub mod reduce;
pub mod rounding;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::polynomial::Polynomial;
    pub use super::reduce::{caddq, freeze, montgomery_reduce, reduce32, Q};
    pub use super::sampling::{sample_in_ball, sample_uniform, sample_uniform_eta, sample_uniform_gamma1};
    pub use super::serialize::{CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde};
}
