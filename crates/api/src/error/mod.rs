//! Error handling for the qsign API

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};
