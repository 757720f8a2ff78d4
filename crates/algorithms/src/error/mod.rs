//! Error handling for lattice primitives

use std::borrow::Cow;
use thiserror::Error as ThisError;

pub mod validate;

/// The error type for lattice primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A decoded field fell outside its legal range
    #[error("Value out of range in {context}: {value}")]
    OutOfRange {
        /// What was being decoded
        context: &'static str,
        /// The offending raw value
        value: i64,
    },

    /// XOF used in the wrong phase (absorb after squeeze)
    #[error("XOF misuse: {0}")]
    XofState(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for lattice primitive operations
pub type Result<T> = core::result::Result<T, Error>;
