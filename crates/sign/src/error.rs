//! Error types for the signature crate

use thiserror::Error as ThisError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid key size
    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    /// Invalid signature size
    #[error("Invalid signature size: expected {expected}, got {actual}")]
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Key material that parses but is internally inconsistent
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// RNG error
    #[error("RNG error: {0}")]
    Rng(String),

    /// The rejection loop hit its attempt cap without producing a signature
    #[error("{algorithm} signing gave up after {attempts} attempts")]
    AttemptsExhausted {
        algorithm: &'static str,
        attempts: u16,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert from algorithms::error::Error
impl From<algorithms::Error> for Error {
    fn from(err: algorithms::Error) -> Self {
        use algorithms::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length { context, expected, actual } => Error::Deserialization(format!(
                "{}: expected {} bytes, got {}",
                context, expected, actual
            )),
            AlgoError::OutOfRange { context, value } => {
                Error::Deserialization(format!("{}: value {} out of range", context, value))
            }
            AlgoError::XofState(msg) => Error::Internal(format!("XOF: {}", msg)),
        }
    }
}

// Convert to api::Error
impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { expected, actual } => api::Error::InvalidLength {
                context: "key",
                expected,
                actual,
            },
            Error::InvalidSignatureSize { expected, actual } => api::Error::InvalidLength {
                context: "signature",
                expected,
                actual,
            },
            Error::InvalidParameter(msg) => api::Error::InvalidParameter {
                context: "sign",
                message: msg,
            },
            Error::InvalidKey(msg) => api::Error::InvalidKey {
                context: "sign",
                message: msg,
            },
            Error::Deserialization(msg) => api::Error::InvalidKey {
                context: "deserialization",
                message: msg,
            },
            Error::Rng(msg) => api::Error::RandomGenerationError {
                context: "sign",
                message: msg,
            },
            Error::AttemptsExhausted { algorithm, attempts } => api::Error::Internal {
                context: algorithm,
                message: format!("signing gave up after {} attempts", attempts),
            },
            Error::Internal(msg) => api::Error::Internal {
                context: "sign",
                message: msg,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
