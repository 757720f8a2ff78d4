//! # qsign
//!
//! A pure Rust implementation of the CRYSTALS-Dilithium (ML-DSA, FIPS 204)
//! post-quantum signature scheme.
//!
//! ## Usage
//!
//! ```
//! let (pk, sk) = qsign::generate_keypair().unwrap();
//! let sig = qsign::sign(b"message", &sk).unwrap();
//! assert!(qsign::verify(b"message", &sig, &pk));
//! assert!(!qsign::verify(b"other message", &sig, &pk));
//! ```
//!
//! The byte-level functions at the crate root use Dilithium3. The typed API in
//! [`signature`] exposes all three levels, context strings, deterministic
//! signing and seeded key generation.
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for the key and signature wrappers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`qsign-api`]: the `Signature` trait family and the API error type
//! - [`qsign-params`]: parameter sets and size constants
//! - [`qsign-algorithms`]: ring arithmetic, NTT, sampling, packing and SHAKE
//! - [`qsign-sign`]: the Dilithium protocol

pub use api;
pub use params;
pub use algorithms;
pub use sign as signature;

pub use signature::{
    Dilithium2, Dilithium3, Dilithium5, SignOptions, SigningMode,
};

use api::Signature as _;
use params::pqc::dilithium::{Dilithium3Params, DilithiumSchemeParams};
use rand::rngs::OsRng;
use signature::{DilithiumPublicKey, DilithiumSecretKey, DilithiumSignatureData};

/// Parameter set used by the byte-level functions
pub type DefaultParams = Dilithium3Params;

/// Scheme used by the byte-level functions
pub type DefaultScheme = Dilithium3;

/// Public key size of the default scheme in bytes
pub const PUBLIC_KEY_SIZE: usize = DefaultParams::PUBLIC_KEY_BYTES;

/// Secret key size of the default scheme in bytes
pub const SECRET_KEY_SIZE: usize = DefaultParams::SECRET_KEY_BYTES;

/// Signature size of the default scheme in bytes
pub const SIGNATURE_SIZE: usize = DefaultParams::SIGNATURE_SIZE;

/// Generates a Dilithium3 key pair from the operating system RNG.
///
/// Returns `(public_key, secret_key)` as raw bytes.
pub fn generate_keypair() -> api::Result<(Vec<u8>, Vec<u8>)> {
    let (pk, sk) = DefaultScheme::keypair(&mut OsRng)?;
    Ok((pk.to_bytes(), sk.to_bytes()))
}

/// Signs `message` with a Dilithium3 secret key (hedged, empty context).
///
/// # Errors
///
/// Returns `InvalidLength` for a secret key of the wrong size, or an error
/// if the key is malformed or the RNG fails.
pub fn sign(message: &[u8], secret_key: &[u8]) -> api::Result<Vec<u8>> {
    let sk = DilithiumSecretKey::from_bytes::<DefaultParams>(secret_key)?;
    Ok(DefaultScheme::sign(message, &sk)?.to_bytes())
}

/// Verifies a Dilithium3 signature. Any malformed input is a rejection.
pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    let (Ok(sig), Ok(pk)) = (
        DilithiumSignatureData::from_bytes::<DefaultParams>(signature),
        DilithiumPublicKey::from_bytes::<DefaultParams>(public_key),
    ) else {
        return false;
    };
    DefaultScheme::verify(message, &sig, &pk)
}

/// Common imports for qsign users
pub mod prelude {
    pub use crate::api::{Error, Result, Signature, SignatureDerive};
    pub use crate::signature::{
        Dilithium, Dilithium2, Dilithium3, Dilithium5, DilithiumPublicKey, DilithiumSecretKey,
        DilithiumSignatureData, SignOptions, SigningMode,
    };
}
