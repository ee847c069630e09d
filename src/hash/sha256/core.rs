//! SHA-256 core hashing functions
//!
//! The digest is a strict left fold over the padded block sequence: the
//! state after block `i` depends only on the state after block `i - 1` and
//! the content of block `i`. Blocks are never skipped or reordered.

use log::{debug, trace};

use super::H256_INIT;
use super::computations::{all_rounds, expand_schedule};
use super::padding::{Block, PaddedMessage};
use crate::error::Result;
use crate::primitives::Digest;

/// Compresses a single 512-bit block into `state`.
///
/// The schedule lives on the stack and is discarded afterwards.
#[inline(always)]
pub fn compress(block: &Block, state: &mut [u32; 8]) {
    let w = expand_schedule(block);

    all_rounds(state, &w);
}

/// Computes the SHA-256 digest of `input`.
///
/// The input is only borrowed. Every length is accepted, including zero;
/// callers that must reject empty input do so before hashing.
///
/// # Errors
/// Fails only if the padded block sequence cannot be allocated, or on a
/// block-count mismatch (see [`PaddedMessage::new`]).
pub fn sha256(input: &[u8]) -> Result<Digest> {
    let padded = PaddedMessage::new(input)?;

    debug!(
        "hashing {} bytes as {} blocks ({} padded bytes)",
        padded.message_len(),
        padded.len(),
        padded.padded_len()
    );

    let state = padded
        .iter()
        .enumerate()
        .fold(H256_INIT, |mut state, (i, block)| {
            compress(block, &mut state);
            trace!("block {i}: state {state:08x?}");
            state
        });

    Ok(Digest::from(state))
}
