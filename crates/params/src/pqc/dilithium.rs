//! Constants for the Dilithium (ML-DSA) digital signature algorithm

/// Dilithium polynomial degree
pub const DILITHIUM_N: usize = 256;

/// Dilithium modulus q = 2^23 - 2^13 + 1
pub const DILITHIUM_Q: i32 = 8380417;

/// Number of low-order bits dropped from t
pub const DILITHIUM_D: u32 = 13;

/// Size of a 32-byte seed (ξ, ρ, K, rnd)
pub const SEED_BYTES: usize = 32;

/// Size of the 64-byte values ρ', tr, μ and ρ''
pub const CRH_BYTES: usize = 64;

/// Packed size of one t1 polynomial (10 bits per coefficient)
pub const POLYT1_PACKED_BYTES: usize = 320;

/// Packed size of one t0 polynomial (13 bits per coefficient)
pub const POLYT0_PACKED_BYTES: usize = 416;

/// Longest context string accepted by the context-aware sign/verify
pub const MAX_CONTEXT_BYTES: usize = 255;

/// Default cap on rejection-loop attempts per signature
pub const MAX_SIGN_ATTEMPTS: u16 = 1000;

/// Common trait for Dilithium parameter sets
pub trait DilithiumSchemeParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    // Ring parameters
    /// Polynomial degree (always 256 for Dilithium)
    const N: usize = DILITHIUM_N;
    /// Prime modulus
    const Q: i32 = DILITHIUM_Q;
    /// Dropped bits parameter
    const D_PARAM: u32 = DILITHIUM_D;

    // Matrix dimensions
    /// Number of polynomials in s2 and t (rows in A)
    const K_DIM: usize;
    /// Number of polynomials in s1 and y (columns in A)
    const L_DIM: usize;

    // Norm bounds
    /// Bound for secret polynomials s1, s2
    const ETA_S1S2: i32;
    /// Range parameter for masking vector y
    const GAMMA1_PARAM: i32;
    /// Low-order rounding range
    const GAMMA2_PARAM: i32;
    /// Rejection bound, tau * eta
    const BETA_PARAM: i32;
    /// Maximum number of hint bits
    const OMEGA_PARAM: usize;
    /// Number of ±1 coefficients in challenge polynomial
    const TAU_PARAM: usize;
    /// Length of the commitment hash c̃ in bytes (λ/4)
    const C_TILDE_BYTES: usize;

    // Packing widths
    /// Bits per packed s1/s2 coefficient
    const ETA_BITS: usize;
    /// Bits per packed z coefficient
    const GAMMA1_BITS: usize;
    /// Bits per packed w1 coefficient
    const W1_BITS: usize;

    // Byte sizes
    /// Packed eta polynomial size
    const POLY_ETA_PACKED_BYTES: usize = DILITHIUM_N * Self::ETA_BITS / 8;
    /// Packed z polynomial size
    const POLY_Z_PACKED_BYTES: usize = DILITHIUM_N * Self::GAMMA1_BITS / 8;
    /// Packed w1 polynomial size
    const POLY_W1_PACKED_BYTES: usize = DILITHIUM_N * Self::W1_BITS / 8;
    /// Public key size in bytes
    const PUBLIC_KEY_BYTES: usize;
    /// Secret key size in bytes
    const SECRET_KEY_BYTES: usize;
    /// Signature size in bytes
    const SIGNATURE_SIZE: usize;
}

/// Public key size: ρ ‖ t1
pub const fn public_key_bytes(k: usize) -> usize {
    SEED_BYTES + k * POLYT1_PACKED_BYTES
}

/// Secret key size: ρ ‖ K ‖ tr ‖ s1 ‖ s2 ‖ t0
pub const fn secret_key_bytes(k: usize, l: usize, eta_bits: usize) -> usize {
    2 * SEED_BYTES + CRH_BYTES + (k + l) * DILITHIUM_N * eta_bits / 8 + k * POLYT0_PACKED_BYTES
}

/// Signature size: c̃ ‖ z ‖ h
pub const fn signature_bytes(c_tilde: usize, k: usize, l: usize, gamma1_bits: usize, omega: usize) -> usize {
    c_tilde + l * DILITHIUM_N * gamma1_bits / 8 + omega + k
}

/// Dilithium2 / ML-DSA-44 (NIST security level 2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dilithium2Params;

impl DilithiumSchemeParams for Dilithium2Params {
    const NAME: &'static str = "Dilithium2";
    const K_DIM: usize = 4;
    const L_DIM: usize = 4;
    const ETA_S1S2: i32 = 2;
    const GAMMA1_PARAM: i32 = 1 << 17;
    const GAMMA2_PARAM: i32 = (DILITHIUM_Q - 1) / 88;
    const BETA_PARAM: i32 = 78;
    const OMEGA_PARAM: usize = 80;
    const TAU_PARAM: usize = 39;
    const C_TILDE_BYTES: usize = 32;
    const ETA_BITS: usize = 3;
    const GAMMA1_BITS: usize = 18;
    const W1_BITS: usize = 6;
    const PUBLIC_KEY_BYTES: usize = 1312;
    const SECRET_KEY_BYTES: usize = 2560;
    const SIGNATURE_SIZE: usize = 2420;
}

/// Dilithium3 / ML-DSA-65 (NIST security level 3)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dilithium3Params;

impl DilithiumSchemeParams for Dilithium3Params {
    const NAME: &'static str = "Dilithium3";
    const K_DIM: usize = 6;
    const L_DIM: usize = 5;
    const ETA_S1S2: i32 = 4;
    const GAMMA1_PARAM: i32 = 1 << 19;
    const GAMMA2_PARAM: i32 = (DILITHIUM_Q - 1) / 32;
    const BETA_PARAM: i32 = 196;
    const OMEGA_PARAM: usize = 55;
    const TAU_PARAM: usize = 49;
    const C_TILDE_BYTES: usize = 48;
    const ETA_BITS: usize = 4;
    const GAMMA1_BITS: usize = 20;
    const W1_BITS: usize = 4;
    const PUBLIC_KEY_BYTES: usize = 1952;
    const SECRET_KEY_BYTES: usize = 4032;
    const SIGNATURE_SIZE: usize = 3309;
}

/// Dilithium5 / ML-DSA-87 (NIST security level 5)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dilithium5Params;

impl DilithiumSchemeParams for Dilithium5Params {
    const NAME: &'static str = "Dilithium5";
    const K_DIM: usize = 8;
    const L_DIM: usize = 7;
    const ETA_S1S2: i32 = 2;
    const GAMMA1_PARAM: i32 = 1 << 19;
    const GAMMA2_PARAM: i32 = (DILITHIUM_Q - 1) / 32;
    const BETA_PARAM: i32 = 120;
    const OMEGA_PARAM: usize = 75;
    const TAU_PARAM: usize = 60;
    const C_TILDE_BYTES: usize = 64;
    const ETA_BITS: usize = 3;
    const GAMMA1_BITS: usize = 20;
    const W1_BITS: usize = 4;
    const PUBLIC_KEY_BYTES: usize = 2592;
    const SECRET_KEY_BYTES: usize = 4896;
    const SIGNATURE_SIZE: usize = 4627;
}
