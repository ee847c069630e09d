//! SHA-256 message padding and segmentation
//!
//! The padded message is laid out as:
//!
//! ```text
//! | message (L bytes) | 0x80 | zeros (K bits) | L * 8 as u64 big-endian |
//! ```
//!
//! where `K` is the smallest number of zero bits such that
//! `L * 8 + 1 + K ≡ 448 (mod 512)`. The total is always a multiple of
//! `BLOCK_LEN`, and the block count is `ceil((L + 9) / 64)`.

use log::trace;

use super::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::{Error, Result};

/// One 512-bit message block.
pub type Block = [u8; BLOCK_LEN];

/// Padding bit appended right after the last message byte.
const TERMINATOR: u8 = 0x80;

/// Returns the padded length in bytes for a message of `len` bytes.
///
/// The terminator byte and the length field are counted first; the
/// remainder up to the next block boundary is zero fill.
pub fn padded_len(len: usize) -> usize {
    let content = len + 1 + LENGTH_FIELD_LEN;

    let rem = content % BLOCK_LEN;
    let fill = if rem != 0 { BLOCK_LEN - rem } else { 0 };

    content + fill
}

/// Returns the number of blocks produced for a message of `len` bytes.
pub fn block_count(len: usize) -> usize {
    padded_len(len) / BLOCK_LEN
}

/// A message padded and split into blocks, in document order.
///
/// Owns the block sequence for the duration of hashing. The source
/// message is only borrowed while the blocks are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    blocks: Vec<Block>,
    message_len: usize,
}

impl PaddedMessage {
    /// Pads `message` and segments it into 64-byte blocks.
    ///
    /// # Errors
    /// - `ErrorKind::Alloc` if the block sequence cannot be allocated.
    /// - `ErrorKind::Internal` if the produced block count disagrees with
    ///   [`block_count`].
    pub fn new(message: &[u8]) -> Result<Self> {
        let len = message.len();
        let count = block_count(len);

        let mut blocks: Vec<Block> = Vec::new();
        blocks
            .try_reserve_exact(count)
            .map_err(|e| Error::alloc("allocate blocks", count * BLOCK_LEN, e))?;

        let mut chunks = message.chunks_exact(BLOCK_LEN);
        for chunk in chunks.by_ref() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            blocks.push(block);
        }

        // Tail bytes plus terminator; zero fill is implicit
        let tail = chunks.remainder();
        let mut block = [0u8; BLOCK_LEN];
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()] = TERMINATOR;

        if tail.len() + 1 > BLOCK_LEN - LENGTH_FIELD_LEN {
            blocks.push(block);
            block = [0u8; BLOCK_LEN];
        }

        let bit_len = (len as u64).wrapping_mul(8);
        block[BLOCK_LEN - LENGTH_FIELD_LEN..].copy_from_slice(&bit_len.to_be_bytes());
        blocks.push(block);

        if blocks.len() != count {
            return Err(Error::internal(
                "segment message",
                format!(
                    "{len}-byte message produced {} blocks, expected {count}",
                    blocks.len()
                ),
            ));
        }

        trace!("padded {len} bytes into {count} blocks");

        Ok(Self {
            blocks,
            message_len: len,
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: even an empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Length of the original message in bytes.
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Total padded length in bytes.
    pub fn padded_len(&self) -> usize {
        self.blocks.len() * BLOCK_LEN
    }
}

impl<'a> IntoIterator for &'a PaddedMessage {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
