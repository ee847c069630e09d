//! SHA-256 digest value
//!
//! A `Digest` is the 32-byte serialization of the final hash state: the
//! eight state words written in order, each as a big-endian `u32`.
//!
//! It is rendered as 64 lowercase hexadecimal characters with no prefix
//! and no separators, which is the conventional `sha256sum` form.

use std::fmt::{Display, Formatter, LowerHex, Result};

mod conv;

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Fixed-size 256-bit SHA-256 digest.
///
/// The bytes are stored in output order (big-endian words).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the eight hash-state words the digest was serialized from.
    pub fn words(&self) -> [u32; 8] {
        <[u32; 8]>::from(*self)
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}
