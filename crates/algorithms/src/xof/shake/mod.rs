//! SHAKE extendable output functions
//!
//! Thin state machines over the `sha3` crate's SHAKE implementations. The
//! rate of each function is exposed because the uniform sampler reads whole
//! blocks at a time.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

/// SHAKE128 rate in bytes
pub const SHAKE128_RATE: usize = 168;

/// SHAKE256 rate in bytes
pub const SHAKE256_RATE: usize = 136;

enum State<H, R> {
    Absorbing(H),
    Squeezing(R),
    // Transitional placeholder while the hasher is consumed
    Poisoned,
}

macro_rules! shake_xof {
    ($name:ident, $hasher:ty, $reader:ty, $doc:expr) => {
        #[doc = $doc]
        pub struct $name {
            state: State<$hasher, $reader>,
        }

        impl $name {
            fn reader(&mut self) -> Result<&mut $reader> {
                if let State::Absorbing(_) = self.state {
                    let prev = core::mem::replace(&mut self.state, State::Poisoned);
                    if let State::Absorbing(hasher) = prev {
                        self.state = State::Squeezing(hasher.finalize_xof());
                    }
                }
                match &mut self.state {
                    State::Squeezing(reader) => Ok(reader),
                    _ => Err(Error::XofState("state lost during finalization")),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as ExtendableOutputFunction>::new()
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    state: State::Absorbing(<$hasher>::default()),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match &mut self.state {
                    State::Absorbing(hasher) => {
                        hasher.update(data);
                        Ok(())
                    }
                    _ => Err(Error::XofState("cannot absorb after squeezing")),
                }
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.reader()?.read(output);
                Ok(())
            }
        }
    };
}

shake_xof!(ShakeXof128, Shake128, Shake128Reader, "SHAKE128 extendable output function");
shake_xof!(ShakeXof256, Shake256, Shake256Reader, "SHAKE256 extendable output function");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake128_empty() {
        let mut xof = ShakeXof128::new();
        let out = xof.squeeze_into_vec(32).unwrap();
        assert_eq!(
            hex::encode(out),
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
        );
    }

    #[test]
    fn test_shake256_empty() {
        let mut xof = ShakeXof256::new();
        let out = xof.squeeze_into_vec(32).unwrap();
        assert_eq!(
            hex::encode(out),
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_incremental_squeeze_matches_single() {
        let mut a = ShakeXof256::new();
        a.update(b"qsign").unwrap();
        a.update(b" stream").unwrap();
        let whole = a.squeeze_into_vec(300).unwrap();

        let mut b = ShakeXof256::new();
        b.update(b"qsign stream").unwrap();
        let mut first = [0u8; 136];
        let mut rest = [0u8; 164];
        b.squeeze(&mut first).unwrap();
        b.squeeze(&mut rest).unwrap();

        assert_eq!(&whole[..136], &first[..]);
        assert_eq!(&whole[136..], &rest[..]);
    }

    #[test]
    fn test_update_after_squeeze_rejected() {
        let mut xof = ShakeXof128::new();
        xof.update(b"abc").unwrap();
        let mut out = [0u8; 8];
        xof.squeeze(&mut out).unwrap();
        assert!(xof.update(b"more").is_err());
    }

    #[test]
    fn test_digest_into() {
        let mut out = [0u8; 64];
        ShakeXof256::digest_into(&[b"ab".as_slice(), b"c".as_slice()], &mut out).unwrap();
        let mut xof = ShakeXof256::new();
        xof.update(b"abc").unwrap();
        assert_eq!(xof.squeeze_into_vec(64).unwrap(), out.to_vec());
        assert!(ShakeXof256::digest_into(&[b"x".as_slice()], &mut []).is_err());
    }
}
