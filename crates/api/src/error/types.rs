//! Error type definitions for signature operations

use thiserror::Error as ThisError;

/// Primary error type for the public API
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key ({context}): {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    #[error("Invalid signature ({context}): {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("Invalid parameter ({context}): {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation failed ({context}): {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Unrecoverable failure inside an algorithm
    #[error("Internal error ({context}): {message}")]
    Internal {
        context: &'static str,
        message: String,
    },
}

/// Result type for API operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Error::InvalidKey { context, .. }
            | Error::InvalidSignature { context, .. }
            | Error::InvalidLength { context, .. }
            | Error::InvalidParameter { context, .. }
            | Error::RandomGenerationError { context, .. }
            | Error::Internal { context, .. } => context,
        }
    }
}
