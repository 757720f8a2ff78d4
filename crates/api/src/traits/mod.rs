//! Trait definitions implemented by the qsign signature schemes

pub mod signature;

pub use signature::{Signature, SignatureDerive};
