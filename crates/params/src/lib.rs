//! Constant values for the qsign library
//!
//! Parameter sets are expressed as zero-sized marker types implementing
//! traits with associated constants, so protocol code can be generic over
//! the security level without runtime dispatch.

pub mod pqc;
