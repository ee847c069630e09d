//! Conversions between `Digest` and its byte and word representations.

use super::{DIGEST_LEN, Digest};

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Digest(value)
    }
}

/// Splits a `Digest` back into eight big-endian 32-bit words.
impl From<Digest> for [u32; 8] {
    fn from(value: Digest) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}

/// Serializes a final hash state, word by word, in big-endian order.
impl From<[u32; 8]> for Digest {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        Digest(out)
    }
}
