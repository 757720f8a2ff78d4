//! Digital Signature Schemes
//!
//! This crate implements the CRYSTALS-Dilithium (ML-DSA, FIPS 204)
//! post-quantum signature scheme at its three security levels.

pub mod error;
pub mod pq;

pub use error::{Error, Result};

// Re-exports from post-quantum schemes
pub use pq::dilithium::{
    Dilithium, Dilithium2, Dilithium3, Dilithium5, DilithiumPublicKey, DilithiumSecretKey,
    DilithiumSignatureData, SignOptions, SigningMode,
};
