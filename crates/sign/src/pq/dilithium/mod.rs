// File: crates/sign/src/pq/dilithium/mod.rs
//! Dilithium Digital Signature Algorithm (ML-DSA, FIPS 204)
//!
//! This module provides high-level implementations for Dilithium2, Dilithium3, and Dilithium5,
//! which are lattice-based digital signature schemes standardized by NIST.
//!
//! The security of Dilithium is based on the hardness of the Module Learning With Errors (MLWE)
//! and Module Short Integer Solution (MSIS) problems over polynomial rings. Signing follows the
//! Fiat-Shamir with Aborts paradigm: candidate signatures that would leak information about the
//! secret key are rejected and the signer retries with a fresh masking vector.
//!
//! This module defines the public API for Dilithium, conforming to the `qsign-api::Signature` trait.
//! Detailed implementations of internal operations are found in submodules:
//! - `polyvec.rs`: `PolyVecL`, `PolyVecK`, matrix expansion and matrix-vector products.
//! - `arithmetic.rs`: vector forms of `Power2Round`, `Decompose`, `MakeHint` and `UseHint`.
//! - `sampling.rs`: sampling of the secret vectors, the masking vector `y` and the challenge `c`.
//! - `encoding.rs`: the byte formats of public keys, secret keys and signatures.
//! - `sign.rs`: the core `keypair_internal`, `sign_internal`, and `verify_internal` logic.
//!
//! # Example
//!
//! ```
//! use qsign_sign::{Dilithium3, SignOptions};
//!
//! let (pk, sk) = Dilithium3::keypair_from_seed(&[7u8; 32]).unwrap();
//! let options = SignOptions::deterministic().with_context(b"example");
//! let sig = Dilithium3::sign_with_options(b"hello", &sk, &options).unwrap();
//! assert!(Dilithium3::verify_with_context(b"hello", b"example", &sig, &pk));
//! ```

use api::{Result as ApiResult, SecretBytes, Signature as SignatureTrait, SignatureDerive};
use core::fmt;
use core::marker::PhantomData;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error as SignError, Result};

// Internal modules for Dilithium logic
mod arithmetic;
mod encoding;
mod polyvec;
mod sampling;
mod sign;

use params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams,
    MAX_CONTEXT_BYTES, MAX_SIGN_ATTEMPTS, SEED_BYTES,
};

// --- Public Key, Secret Key, Signature Data Wrapper Structs ---
// These structs wrap the serialized byte representations. Constructors check
// the length against a parameter set; the content is validated when used.

/// Dilithium Public Key.
///
/// Stores the packed representation of `(rho, t1)`.
/// - `rho`: A 32-byte seed used to deterministically generate the matrix A.
/// - `t1`: A vector of K polynomials holding the high-order bits of `t = A*s1 + s2`,
///   10 bits per coefficient.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DilithiumPublicKey(pub(crate) Vec<u8>);

/// Dilithium Secret Key.
///
/// Stores the packed representation of `(rho, K, tr, s1, s2, t0)`.
/// - `rho`: Seed for matrix A (same as in public key).
/// - `K`: A 32-byte seed mixed into the per-signature masking seed.
/// - `tr`: The 64-byte hash of the packed public key.
/// - `s1`, `s2`: Secret polynomial vectors with coefficients in `[-eta, eta]`.
/// - `t0`: The low-order bits of `t`, coefficients in `(-2^12, 2^12]`.
///
/// The bytes are wiped on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DilithiumSecretKey(pub(crate) Vec<u8>);

/// Dilithium Signature Data.
///
/// Stores the packed representation of `(c_tilde, z, h)`.
/// - `c_tilde`: The commitment hash (32/48/64 bytes by level) the challenge is derived from.
/// - `z`: A vector of L polynomials, `z = y + c*s1`, with `||z||∞ < gamma1 - beta`.
/// - `h`: The hint vector, stored as omega index bytes plus K cumulative counts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DilithiumSignatureData(pub(crate) Vec<u8>);

impl fmt::Debug for DilithiumSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DilithiumSecretKey({} bytes, REDACTED)", self.0.len())
    }
}

macro_rules! impl_wrapper {
    ($name:ident, $len:ident, $err:ident) => {
        impl $name {
            /// Wraps serialized bytes after checking the length for parameter set `P`.
            pub fn from_bytes<P: DilithiumSchemeParams>(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != P::$len {
                    return Err(SignError::$err {
                        expected: P::$len,
                        actual: bytes.len(),
                    });
                }
                Ok(Self(bytes.to_vec()))
            }

            /// Returns a copy of the serialized bytes.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.clone()
            }

            /// Length of the serialized form.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the serialized form is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

impl_wrapper!(DilithiumPublicKey, PUBLIC_KEY_BYTES, InvalidKeySize);
impl_wrapper!(DilithiumSecretKey, SECRET_KEY_BYTES, InvalidKeySize);
impl_wrapper!(DilithiumSignatureData, SIGNATURE_SIZE, InvalidSignatureSize);

// --- Signing options ---

/// Source of the 32-byte per-signature randomness `rnd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SigningMode {
    /// Fresh random bytes from the RNG (the default)
    #[default]
    Hedged,
    /// All-zero bytes: the signature depends only on key, message and context
    Deterministic,
}

/// Runtime options for signing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignOptions {
    /// Context string bound into the signature, at most 255 bytes
    pub context: Vec<u8>,
    /// Hedged or deterministic signing
    pub mode: SigningMode,
    /// Cap on rejection-loop attempts before giving up. Values above
    /// 65536 / L are lowered to that bound, past which the masking
    /// vectors of earlier attempts would repeat.
    pub max_attempts: u16,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            context: Vec::new(),
            mode: SigningMode::Hedged,
            max_attempts: MAX_SIGN_ATTEMPTS,
        }
    }
}

impl SignOptions {
    /// Default options with deterministic signing.
    pub fn deterministic() -> Self {
        Self {
            mode: SigningMode::Deterministic,
            ..Self::default()
        }
    }

    /// Sets the context string.
    pub fn with_context(mut self, context: &[u8]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// Sets the attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: u16) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Generic Dilithium signature structure parameterized by `P: DilithiumSchemeParams`.
/// This allows a single core implementation (`sign.rs`) to be instantiated for
/// different Dilithium security levels (Dilithium2, Dilithium3, Dilithium5)
/// by simply changing the type parameter `P`.
pub struct Dilithium<P: DilithiumSchemeParams + 'static> {
    _params: PhantomData<P>,
}

impl<P: DilithiumSchemeParams> Dilithium<P> {
    /// Public key size in bytes
    pub const PUBLIC_KEY_SIZE: usize = P::PUBLIC_KEY_BYTES;
    /// Secret key size in bytes
    pub const SECRET_KEY_SIZE: usize = P::SECRET_KEY_BYTES;
    /// Signature size in bytes
    pub const SIGNATURE_SIZE: usize = P::SIGNATURE_SIZE;

    /// Deterministic key generation from the 32-byte seed ξ.
    pub fn keypair_from_seed(
        seed: &[u8; SEED_BYTES],
    ) -> Result<(DilithiumPublicKey, DilithiumSecretKey)> {
        let (pk, sk) = sign::keypair_internal::<P>(seed)?;
        Ok((DilithiumPublicKey(pk), DilithiumSecretKey(sk)))
    }

    /// Signs with explicit options, drawing hedging randomness from `rng`.
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &DilithiumSecretKey,
        options: &SignOptions,
        rng: &mut R,
    ) -> Result<DilithiumSignatureData> {
        let mut rnd = Zeroizing::new([0u8; SEED_BYTES]);
        if options.mode == SigningMode::Hedged {
            rng.try_fill_bytes(&mut rnd[..])
                .map_err(|e| SignError::Rng(e.to_string()))?;
        }
        let sig = sign::sign_internal::<P>(
            message,
            &secret_key.0,
            &options.context,
            &rnd,
            options.max_attempts,
        )?;
        Ok(DilithiumSignatureData(sig))
    }

    /// Signs with explicit options using the operating system RNG.
    pub fn sign_with_options(
        message: &[u8],
        secret_key: &DilithiumSecretKey,
        options: &SignOptions,
    ) -> Result<DilithiumSignatureData> {
        Self::sign_with_rng(message, secret_key, options, &mut OsRng)
    }

    /// Deterministic signing (rnd = 0^32) with an empty context.
    pub fn sign_deterministic(
        message: &[u8],
        secret_key: &DilithiumSecretKey,
    ) -> Result<DilithiumSignatureData> {
        Self::sign_with_options(message, secret_key, &SignOptions::deterministic())
    }

    /// Hedged signing bound to a context string.
    pub fn sign_with_context(
        message: &[u8],
        context: &[u8],
        secret_key: &DilithiumSecretKey,
    ) -> Result<DilithiumSignatureData> {
        Self::sign_with_options(message, secret_key, &SignOptions::default().with_context(context))
    }

    /// Verifies a signature made under `context`. Contexts longer than
    /// 255 bytes never verify.
    pub fn verify_with_context(
        message: &[u8],
        context: &[u8],
        signature: &DilithiumSignatureData,
        public_key: &DilithiumPublicKey,
    ) -> bool {
        if context.len() > MAX_CONTEXT_BYTES {
            return false;
        }
        sign::verify_internal::<P>(message, &signature.0, &public_key.0, context)
    }

    /// Regenerates the public key from a secret key, checking that the
    /// secret key's embedded hash matches.
    pub fn public_key_from_secret_key(secret_key: &DilithiumSecretKey) -> Result<DilithiumPublicKey> {
        Ok(DilithiumPublicKey(sign::public_key_from_secret_key::<P>(&secret_key.0)?))
    }
}

// --- Implement api::Signature for Dilithium<P> ---
impl<P: DilithiumSchemeParams> SignatureTrait for Dilithium<P> {
    type PublicKey = DilithiumPublicKey;
    type SecretKey = DilithiumSecretKey;
    type SignatureData = DilithiumSignatureData;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let seed = SecretBytes::<SEED_BYTES>::random(rng)?;
        Self::keypair_from_seed(&seed).map_err(api::Error::from)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Self::sign_with_options(message, secret_key, &SignOptions::default())
            .map_err(api::Error::from)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        sign::verify_internal::<P>(message, &signature.0, &public_key.0, &[])
    }
}

impl<P: DilithiumSchemeParams> SignatureDerive for Dilithium<P> {
    const SEED_SIZE: usize = SEED_BYTES;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        let seed = SecretBytes::<SEED_BYTES>::from_slice(seed)?;
        Self::keypair_from_seed(&seed).map_err(api::Error::from)
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Self::public_key_from_secret_key(secret_key).map_err(api::Error::from)
    }
}

// Concrete types for the three security levels.
pub type Dilithium2 = Dilithium<Dilithium2Params>;
pub type Dilithium3 = Dilithium<Dilithium3Params>;
pub type Dilithium5 = Dilithium<Dilithium5Params>;
