//! Public API traits and types for the qsign library
//!
//! This crate provides the public API surface shared by the qsign crates:
//! the signature trait family, the API-level error type, and zeroizing
//! byte containers used for seeds.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

pub use traits::{Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::signature;
