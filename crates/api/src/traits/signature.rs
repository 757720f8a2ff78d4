//! Digital signature traits for qsign
//!
//! This module defines the traits that signature algorithms implement.
//! Secret keys are never required to be mutable through the trait surface.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types: the trait only demands that they can be
/// zeroized and cloned, never that they expose mutable bytes.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must draw all key randomness from `rng`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `true` only for a valid signature. Malformed inputs are a
    /// rejection, never an error.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool;
}

/// Optional trait for signature algorithms that support key derivation
///
/// Derivation must be deterministic: the same seed always yields the same
/// key pair.
pub trait SignatureDerive: Signature {
    /// Exact seed size in bytes
    const SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// # Errors
    ///
    /// Returns an error if the seed has the wrong length
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is malformed or inconsistent
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
